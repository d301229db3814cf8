use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::CoreError;

/// Length of the hyphenated UUID text form (`8-4-4-4-12`).
const HYPHENATED_LEN: usize = 36;

/// Byte offsets of the four group separators in the hyphenated form.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Unique identifier of a registered device.
///
/// Always generated by the registry before a device is handed to the store,
/// never by the store itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct DeviceId(pub Uuid);

impl DeviceId {
    /// Creates a new random `DeviceId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a single path segment into a `DeviceId`.
    ///
    /// Only the hyphenated textual form is accepted (32 hex digits in five
    /// dash-separated groups, either case). Braced, URN and undashed forms
    /// are rejected.
    ///
    /// # Errors
    /// Returns [`CoreError::MissingDeviceId`] for an empty segment,
    /// [`CoreError::InvalidRoute`] if the segment contains `/`, and
    /// [`CoreError::InvalidDeviceId`] for anything else that is not UUID text.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.is_empty() {
            return Err(CoreError::MissingDeviceId);
        }
        if raw.contains('/') {
            return Err(CoreError::InvalidRoute);
        }
        if !is_hyphenated_uuid(raw) {
            return Err(CoreError::InvalidDeviceId);
        }
        Uuid::try_parse(raw)
            .map(Self)
            .map_err(|_| CoreError::InvalidDeviceId)
    }

    /// Returns the inner `Uuid`.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

fn is_hyphenated_uuid(raw: &str) -> bool {
    raw.len() == HYPHENATED_LEN
        && raw.bytes().enumerate().all(|(i, b)| {
            if HYPHEN_POSITIONS.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_hexdigit()
            }
        })
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DeviceId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for DeviceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

//! Device records and validated creation requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CoreError, DeviceId};

/// A persisted, monitored device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Device {
    /// Registry-assigned identifier.
    pub id: DeviceId,
    /// Human-readable device name.
    pub name: String,
    /// Site the device is installed at.
    pub site: String,
    /// Kind of device, e.g. `"sensor"` or `"plc"`.
    pub device_type: String,
    /// Store-managed status, e.g. `"online"`.
    pub status: String,
    /// When the store persisted the record.
    pub created_at: DateTime<Utc>,
}

impl Device {
    /// Builds a fully-formed record from a validated creation request.
    #[must_use]
    pub fn from_new(new: NewDevice, status: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: new.id,
            name: new.name,
            site: new.site,
            device_type: new.device_type,
            status: status.into(),
            created_at,
        }
    }
}

/// A creation request whose fields are trimmed and known to be non-empty.
///
/// The only way to build one is [`NewDevice::new`], so a store never sees a
/// blank `name`, `site` or `device_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDevice {
    id: DeviceId,
    name: String,
    site: String,
    device_type: String,
}

impl NewDevice {
    /// Trims and validates the creation fields.
    ///
    /// Fields are checked in the order `name`, `site`, `device_type`; the
    /// first blank one is reported.
    ///
    /// # Errors
    /// Returns [`CoreError::MissingField`] naming the first field that is
    /// empty after trimming.
    pub fn new(id: DeviceId, name: &str, site: &str, device_type: &str) -> Result<Self, CoreError> {
        Ok(Self {
            id,
            name: required("name", name)?,
            site: required("site", site)?,
            device_type: required("device_type", device_type)?,
        })
    }

    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn site(&self) -> &str {
        &self.site
    }

    #[must_use]
    pub fn device_type(&self) -> &str {
        &self.device_type
    }
}

fn required(field: &'static str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::MissingField { field });
    }
    Ok(trimmed.to_owned())
}

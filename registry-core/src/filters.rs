//! Listing filters and pagination window.
//!
//! Turns a raw `application/x-www-form-urlencoded` query string into a
//! [`DeviceFilters`] value. Absent or blank text filters become `None` so the
//! store can branch on presence without ever matching the empty string.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Page size used when the caller does not send `limit`.
pub const DEFAULT_LIMIT: u32 = 50;

/// Largest page size; larger requests are clamped to it.
pub const MAX_LIMIT: u32 = 200;

/// Normalized listing request: optional exact-match filters plus a page window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct DeviceFilters {
    /// Exact-match site filter. `None` means no constraint.
    pub site: Option<String>,
    /// Exact-match status filter. `None` means no constraint.
    pub status: Option<String>,
    /// Page size in `1..=MAX_LIMIT`.
    pub limit: u32,
    /// Number of matching records to skip.
    pub offset: u32,
}

impl Default for DeviceFilters {
    fn default() -> Self {
        Self { site: None, status: None, limit: DEFAULT_LIMIT, offset: 0 }
    }
}

impl DeviceFilters {
    /// Normalizes a raw query string (without the leading `?`).
    ///
    /// When a key repeats, its first occurrence is used. Unknown keys are
    /// ignored. An empty `limit` or `offset` counts as absent.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidQuery`] if the string is not form data,
    /// [`CoreError::InvalidLimit`] if `limit` is not an integer or is `<= 0`,
    /// and [`CoreError::InvalidOffset`] if `offset` is not an integer or is
    /// negative.
    pub fn from_query(raw: &str) -> Result<Self, CoreError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw)
            .map_err(|e| CoreError::InvalidQuery { reason: e.to_string() })?;

        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .filter(|v| !v.is_empty())
        };

        let limit = match first("limit") {
            Some(v) => parse_limit(v)?,
            None => DEFAULT_LIMIT,
        };
        let offset = match first("offset") {
            Some(v) => parse_offset(v)?,
            None => 0,
        };

        Ok(Self {
            site: first("site").and_then(non_blank),
            status: first("status").and_then(non_blank),
            limit,
            offset,
        })
    }
}

fn non_blank(v: &str) -> Option<String> {
    let trimmed = v.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn parse_limit(v: &str) -> Result<u32, CoreError> {
    let n: i64 = v.parse().map_err(|_| CoreError::InvalidLimit)?;
    if n <= 0 {
        return Err(CoreError::InvalidLimit);
    }
    // n is in 1..=MAX_LIMIT after the clamp, so the conversion cannot fail.
    Ok(u32::try_from(n.min(i64::from(MAX_LIMIT))).unwrap_or(MAX_LIMIT))
}

fn parse_offset(v: &str) -> Result<u32, CoreError> {
    let n: i64 = v.parse().map_err(|_| CoreError::InvalidOffset)?;
    u32::try_from(n).map_err(|_| CoreError::InvalidOffset)
}

//! Error types for the store crate.

use std::time::Duration;

use registry_core::DeviceId;

/// Errors that can occur while talking to a device store.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// No device with the given ID exists.
    #[error("device not found: {0}")]
    NotFound(DeviceId),

    /// A device with the given ID already exists.
    #[error("device already exists: {0}")]
    Conflict(DeviceId),

    /// The call did not finish before its deadline.
    #[error("store call timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Any other backend failure (connectivity, constraint violation, ...).
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns `true` for the well-formed "no such record" signal.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

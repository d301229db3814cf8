//! Device store abstraction trait.
//!
//! Handlers only ever talk to this trait, so any persistence engine can back
//! the registry without touching request handling.

use async_trait::async_trait;
use registry_core::{Device, DeviceFilters, DeviceId, NewDevice};

use crate::StoreError;

/// Persistence contract for device records.
///
/// Implementations must be `Send + Sync` to allow use across request tasks.
///
/// # Cancel Safety
/// Callers bound every call with [`crate::with_deadline`] and may drop the
/// future at any await point. Implementations must not leave a half-written
/// record behind when that happens.
#[async_trait]
pub trait DeviceStore: Send + Sync {
    /// Persist a new device under exactly the ID carried by `device`.
    ///
    /// # Errors
    /// Returns [`StoreError::Conflict`] if the ID is already taken, or
    /// [`StoreError::Backend`] for any backend failure.
    async fn create(&self, device: NewDevice) -> Result<Device, StoreError>;

    /// Look up a device by ID.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no such device exists.
    async fn get(&self, id: DeviceId) -> Result<Device, StoreError>;

    /// List devices matching `filters`, paged by its `limit` and `offset`.
    ///
    /// Ordering is implementation-defined but stable across calls with the
    /// same filters.
    ///
    /// # Errors
    /// Returns [`StoreError::Backend`] for any backend failure.
    async fn list(&self, filters: &DeviceFilters) -> Result<Vec<Device>, StoreError>;
}

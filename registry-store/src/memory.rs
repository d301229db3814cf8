//! In-memory device store.
//!
//! Keeps records in insertion order, which is the stable ordering `list`
//! pages over. Nothing survives a restart.

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use registry_core::{Device, DeviceFilters, DeviceId, NewDevice};

use crate::{DeviceStore, StoreError};

/// Status assigned to freshly created devices.
pub const INITIAL_STATUS: &str = "unknown";

/// Thread-safe in-memory registry of devices.
#[derive(Debug, Default)]
pub struct MemoryDeviceStore {
    devices: RwLock<IndexMap<DeviceId, Device>>,
}

impl MemoryDeviceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed record, replacing any record with the same ID.
    ///
    /// Lets callers load devices whose status is already known.
    pub async fn seed(&self, device: Device) {
        self.devices.write().await.insert(device.id, device);
    }

    /// Number of stored devices.
    pub async fn len(&self) -> usize {
        self.devices.read().await.len()
    }

    /// Returns `true` if no device has been stored.
    pub async fn is_empty(&self) -> bool {
        self.devices.read().await.is_empty()
    }
}

#[async_trait]
impl DeviceStore for MemoryDeviceStore {
    async fn create(&self, device: NewDevice) -> Result<Device, StoreError> {
        let mut devices = self.devices.write().await;
        let id = device.id();
        if devices.contains_key(&id) {
            return Err(StoreError::Conflict(id));
        }
        let record = Device::from_new(device, INITIAL_STATUS, Utc::now());
        devices.insert(id, record.clone());
        tracing::debug!(device_id = %id, total = devices.len(), "device stored");
        Ok(record)
    }

    async fn get(&self, id: DeviceId) -> Result<Device, StoreError> {
        self.devices
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self, filters: &DeviceFilters) -> Result<Vec<Device>, StoreError> {
        let devices = self.devices.read().await;
        let matches = |d: &&Device| {
            filters.site.as_deref().is_none_or(|site| d.site == site)
                && filters.status.as_deref().is_none_or(|status| d.status == status)
        };
        Ok(devices
            .values()
            .filter(matches)
            .skip(filters.offset as usize)
            .take(filters.limit as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_device(name: &str, site: &str) -> NewDevice {
        match NewDevice::new(DeviceId::new(), name, site, "sensor") {
            Ok(d) => d,
            Err(e) => panic!("invalid test device: {e}"),
        }
    }

    fn filters(raw: &str) -> DeviceFilters {
        match DeviceFilters::from_query(raw) {
            Ok(f) => f,
            Err(e) => panic!("invalid test query {raw:?}: {e}"),
        }
    }

    async fn create(store: &MemoryDeviceStore, name: &str, site: &str) -> Device {
        match store.create(new_device(name, site)).await {
            Ok(d) => d,
            Err(e) => panic!("create failed: {e}"),
        }
    }

    fn names(devices: &[Device]) -> Vec<&str> {
        devices.iter().map(|d| d.name.as_str()).collect()
    }

    #[tokio::test]
    async fn create_persists_supplied_id() {
        let store = MemoryDeviceStore::new();
        let new = new_device("pump-1", "A");
        let id = new.id();
        let created = match store.create(new).await {
            Ok(d) => d,
            Err(e) => panic!("create failed: {e}"),
        };
        assert_eq!(created.id, id, "store must keep the caller's id");
        assert_eq!(created.status, INITIAL_STATUS);
        match store.get(id).await {
            Ok(found) => assert_eq!(found, created),
            Err(e) => panic!("get after create failed: {e}"),
        }
    }

    #[tokio::test]
    async fn create_with_taken_id_conflicts() {
        let store = MemoryDeviceStore::new();
        let new = new_device("pump-1", "A");
        let duplicate = new.clone();
        if let Err(e) = store.create(new).await {
            panic!("first create failed: {e}");
        }
        match store.create(duplicate).await {
            Err(StoreError::Conflict(_)) => {}
            other => panic!("expected conflict, got {other:?}"),
        }
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let store = MemoryDeviceStore::new();
        assert!(store.is_empty().await);
        let id = DeviceId::new();
        match store.get(id).await {
            Err(StoreError::NotFound(missing)) => assert_eq!(missing, id),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_filters_by_site_and_status() {
        let store = MemoryDeviceStore::new();
        create(&store, "a1", "A").await;
        create(&store, "b1", "B").await;
        let mut online = create(&store, "a2", "A").await;
        online.status = "online".to_owned();
        store.seed(online).await;

        let by_site = store.list(&filters("site=A")).await;
        match by_site {
            Ok(devices) => assert_eq!(names(&devices), ["a1", "a2"]),
            Err(e) => panic!("list failed: {e}"),
        }

        let by_both = store.list(&filters("site=A&status=online")).await;
        match by_both {
            Ok(devices) => assert_eq!(names(&devices), ["a2"]),
            Err(e) => panic!("list failed: {e}"),
        }

        let unfiltered = store.list(&DeviceFilters::default()).await;
        match unfiltered {
            Ok(devices) => assert_eq!(devices.len(), 3),
            Err(e) => panic!("list failed: {e}"),
        }
    }

    #[tokio::test]
    async fn list_pages_in_insertion_order() {
        let store = MemoryDeviceStore::new();
        for name in ["d0", "d1", "d2", "d3", "d4"] {
            create(&store, name, "A").await;
        }
        match store.list(&filters("limit=2&offset=1")).await {
            Ok(devices) => assert_eq!(names(&devices), ["d1", "d2"]),
            Err(e) => panic!("list failed: {e}"),
        }
        match store.list(&filters("offset=10")).await {
            Ok(devices) => assert!(devices.is_empty(), "offset past the end yields nothing"),
            Err(e) => panic!("list failed: {e}"),
        }
    }
}

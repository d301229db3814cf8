//! Device store contract for the device registry.
//!
//! Defines the [`DeviceStore`] trait handlers depend on, the deadline wrapper
//! every store call goes through, and an in-memory implementation.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod deadline;
pub mod error;
pub mod memory;
pub mod store;

pub use deadline::{with_deadline, DEFAULT_STORE_TIMEOUT};
pub use error::StoreError;
pub use memory::MemoryDeviceStore;
pub use store::DeviceStore;

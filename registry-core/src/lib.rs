//! Core types for the device registry.
//!
//! Defines the device record, the identifier codec used on path segments,
//! and the normalizer that turns listing query strings into typed filters.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod device;
pub mod error;
pub mod filters;
pub mod id;

pub use device::{Device, NewDevice};
pub use error::CoreError;
pub use filters::{DeviceFilters, DEFAULT_LIMIT, MAX_LIMIT};
pub use id::DeviceId;

//! HTTP gateway for the device registry.
//!
//! Translates requests into validated store calls: decodes bodies and path
//! identifiers, normalizes listing filters, bounds each store call with a
//! deadline and maps the outcome to an HTTP status.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;

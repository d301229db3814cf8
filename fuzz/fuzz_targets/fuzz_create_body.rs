//! Fuzz target: `POST /devices` body decoding.
//!
//! Arbitrary bytes fed to the create-body decoder must never panic; errors
//! are expected and fine.

#![no_main]

use libfuzzer_sys::fuzz_target;
use registry_gateway::routes::CreateDeviceBody;

fuzz_target!(|data: &[u8]| {
    let _ = CreateDeviceBody::from_slice(data);
});

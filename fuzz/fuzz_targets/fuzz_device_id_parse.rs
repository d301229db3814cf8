//! Fuzz target: `DeviceId::parse` on arbitrary path segments.
//!
//! Parsing must never panic, and anything it accepts must print back to the
//! same identifier.

#![no_main]

use libfuzzer_sys::fuzz_target;
use registry_core::DeviceId;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(id) = DeviceId::parse(raw) {
        assert!(!raw.contains('/'), "ids containing a separator must be rejected");
        assert_eq!(DeviceId::parse(&id.to_string()), Ok(id), "accepted ids must round-trip");
    }
});

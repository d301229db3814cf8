//! Fuzz target: listing query normalization.
//!
//! Any query string either fails validation or yields a page window inside
//! the allowed bounds.

#![no_main]

use libfuzzer_sys::fuzz_target;
use registry_core::{DeviceFilters, MAX_LIMIT};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(filters) = DeviceFilters::from_query(raw) {
        assert!((1..=MAX_LIMIT).contains(&filters.limit), "limit out of bounds");
        assert!(filters.site.as_deref().is_none_or(|s| !s.trim().is_empty()));
        assert!(filters.status.as_deref().is_none_or(|s| !s.trim().is_empty()));
    }
});

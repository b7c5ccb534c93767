// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for merge-request URL extraction

#![no_main]

use libfuzzer_sys::fuzz_target;

use mergelog_core::extract_merge_request_url;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // extract_merge_request_url should never panic on any input
        if let Some(url) = extract_merge_request_url(input) {
            // The trimmed remainder never carries surrounding whitespace
            assert_eq!(url.trim(), url);
        }
    }
});

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for squash-merge classification

#![no_main]

use libfuzzer_sys::fuzz_target;

use mergelog_core::{SQUASH_MERGE_MARKER, is_squash_merge};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let squash = is_squash_merge(input);
        // Classification is exactly marker presence
        assert_eq!(squash, input.contains(SQUASH_MERGE_MARKER));
    }
});

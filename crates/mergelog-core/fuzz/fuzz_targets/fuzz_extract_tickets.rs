// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for ticket extraction
//!
//! This fuzzes `extract_tickets`, which scans whitespace-delimited tokens
//! of arbitrary commit show text for `#<digits>` references.

#![no_main]

use libfuzzer_sys::fuzz_target;

use mergelog_core::extract_tickets;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // extract_tickets should never panic on any input
        for ticket in extract_tickets(input) {
            assert!(ticket.starts_with('#'));
        }
    }
});

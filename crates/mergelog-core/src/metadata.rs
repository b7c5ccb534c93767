// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Ticket and merge-request metadata extraction
//!
//! Both extractors operate on a commit's full show text. Ticket references
//! are scanned per whitespace-delimited token; merge-request URLs are
//! scanned per line.

use regex::Regex;
use std::sync::OnceLock;

/// Line marker that precedes the merge-request URL in a squash-merge body
pub const MERGE_REQUEST_MARKER: &str = "Merged-on:";

// Compiled once on first use
static TICKET_REGEX: OnceLock<Regex> = OnceLock::new();

/// Pattern for a ticket reference: `#` followed by ASCII digits
fn get_ticket_regex() -> &'static Regex {
    TICKET_REGEX.get_or_init(|| Regex::new(r"#[0-9]+").expect("Failed to compile ticket regex"))
}

/// Extract ticket references from a commit's show text
///
/// Tokens are split on whitespace; each token contributes at most one
/// reference, the leftmost `#<digits>` substring it contains. Surrounding
/// punctuation inside the token is ignored. Occurrences are returned in
/// encounter order with duplicates preserved.
#[must_use]
pub fn extract_tickets(show_text: &str) -> Vec<String> {
    let pattern = get_ticket_regex();
    show_text
        .split_whitespace()
        .filter_map(|token| pattern.find(token))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract the merge-request URL from a commit's show text
///
/// Returns the trimmed remainder of the first line containing the
/// `Merged-on:` marker, or `None` when no such line exists. A marker line
/// with nothing after it yields `Some("")`.
#[must_use]
pub fn extract_merge_request_url(show_text: &str) -> Option<String> {
    show_text.lines().find_map(|line| {
        line.find(MERGE_REQUEST_MARKER)
            .map(|at| line[at + MERGE_REQUEST_MARKER.len()..].trim().to_string())
    })
}

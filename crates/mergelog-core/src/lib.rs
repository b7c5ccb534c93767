// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! mergelog-core: Commit classification and changelog formatting for mergelog
//!
//! This library crate turns commits read by `mergelog-git` into changelog
//! lines: it classifies squash-merge commits, extracts ticket references
//! and merge-request URLs from their show text, resolves ticket URLs
//! against a space URL, and renders one of several output modes.

#![warn(missing_docs)]

//! ## Squash-merge convention
//!
//! A squash-merge commit is a plain single-parent commit whose message
//! carries a `Merged-on: <merge-request-url>` line. Classification is a
//! substring search for the marker over the commit's full show text.
//!
//! ## Example
//!
//! ```rust
//! use mergelog_core::{OutputMode, render_commit};
//! use mergelog_git::Commit;
//!
//! # fn render(commit: &Commit) {
//! for line in render_commit(OutputMode::Changes, commit, None) {
//!     println!("{line}");
//! }
//! # }
//! ```

pub mod classify;
pub mod format;
pub mod metadata;
pub mod space;

pub use classify::{SQUASH_MERGE_MARKER, describe, is_squash_merge};
pub use format::{OutputMode, render_commit};
pub use metadata::{MERGE_REQUEST_MARKER, extract_merge_request_url, extract_tickets};
pub use space::{resolve_ticket_url, space_name_from_remote, space_url_from_remote};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::format::{OutputMode, render_commit};
    pub use crate::metadata::{extract_merge_request_url, extract_tickets};
    pub use crate::space::{resolve_ticket_url, space_url_from_remote};
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Output modes and per-commit rendering

use crate::classify;
use crate::metadata;
use crate::space;
use mergelog_git::Commit;

/// The derived view emitted for each commit
///
/// Selected once at startup and applied uniformly to every commit in the
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Raw commit hashes
    Commits,
    /// One description line per commit
    #[default]
    Changes,
    /// Deduplicated, sorted ticket references
    Tickets,
    /// Deduplicated, sorted resolved ticket URLs
    TicketUrls,
    /// Merge-request URL per commit, empty line when absent
    MergeRequests,
}

impl OutputMode {
    /// Look up a mode by its command-line name
    ///
    /// Accepts the aliases `ticket`, `urls` and `mr`. Returns `None` for
    /// unrecognized names; callers reject those before processing any
    /// commit.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "commits" => Some(Self::Commits),
            "changes" => Some(Self::Changes),
            "ticket" | "tickets" => Some(Self::Tickets),
            "ticket_urls" | "urls" => Some(Self::TicketUrls),
            "merge_requests" | "mr" => Some(Self::MergeRequests),
            _ => None,
        }
    }

    /// Canonical command-line name of the mode
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Commits => "commits",
            Self::Changes => "changes",
            Self::Tickets => "tickets",
            Self::TicketUrls => "ticket_urls",
            Self::MergeRequests => "merge_requests",
        }
    }
}

/// Render the output lines for one commit under the given mode
///
/// The commit's show text is rendered once here and shared by
/// classification and metadata extraction.
#[must_use]
pub fn render_commit(mode: OutputMode, commit: &Commit, space_url: Option<&str>) -> Vec<String> {
    let show_text = commit.show_text();
    match mode {
        OutputMode::Commits => vec![commit.sha.clone()],
        OutputMode::Changes => vec![classify::describe(commit, &show_text).to_string()],
        OutputMode::Tickets => sorted_unique(metadata::extract_tickets(&show_text)),
        OutputMode::TicketUrls => sorted_unique(
            metadata::extract_tickets(&show_text)
                .iter()
                .map(|ticket| space::resolve_ticket_url(ticket, space_url))
                .collect(),
        ),
        OutputMode::MergeRequests => {
            vec![metadata::extract_merge_request_url(&show_text).unwrap_or_default()]
        }
    }
}

/// Deduplicate and sort the items emitted for one commit
fn sorted_unique(mut items: Vec<String>) -> Vec<String> {
    items.sort();
    items.dedup();
    items
}

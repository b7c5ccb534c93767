//! Squash-merge classification and commit descriptions

use mergelog_git::Commit;
use tracing::debug;

/// Marker substring whose presence in a commit's show text classifies it
/// as a squash merge
///
/// This is the convention marker written by the merge tooling; the search
/// is case-sensitive and runs over the whole show text.
pub const SQUASH_MERGE_MARKER: &str = "Merged-on";

/// Classify a commit from its full show text
#[must_use]
pub fn is_squash_merge(show_text: &str) -> bool {
    show_text.contains(SQUASH_MERGE_MARKER)
}

/// Select the display text for a commit
///
/// Squash merges are described by the first line of the message body (empty
/// when the body is empty); ordinary commits by their summary line verbatim.
#[must_use]
pub fn describe<'a>(commit: &'a Commit, show_text: &str) -> &'a str {
    if is_squash_merge(show_text) {
        debug!(sha = %commit.short_sha(), "squash-merge commit");
        commit.body().lines().next().unwrap_or("")
    } else {
        debug!(sha = %commit.short_sha(), "ordinary commit");
        commit.summary()
    }
}

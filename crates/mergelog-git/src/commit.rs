//! Git commit types and operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a parsed git commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// Full commit message: summary line, blank separator, body
    pub message: String,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
    /// Parent commit SHAs
    pub parents: Vec<String>,
}

impl Commit {
    /// Validate that a SHA is a valid 40-character hex string
    #[must_use]
    pub fn is_valid_sha(sha: &str) -> bool {
        sha.len() == 40 && sha.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get the short SHA (first 7 characters)
    #[must_use]
    pub fn short_sha(&self) -> &str {
        &self.sha[..7.min(self.sha.len())]
    }

    /// Check if this is a true merge commit (has multiple parents)
    ///
    /// Squash-merge commits have a single parent and are not merges in
    /// this sense; they are told apart by their message, not their shape.
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Get the summary line (first line of the commit message)
    #[must_use]
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Get the message body: the text after the summary line and the
    /// blank-line separator
    ///
    /// Returns the empty string for single-line messages. A message without
    /// the conventional blank separator yields everything after the first
    /// line. The separator may use LF or CRLF line endings.
    #[must_use]
    pub fn body(&self) -> &str {
        match self.message.split_once('\n') {
            Some((_, rest)) => rest
                .strip_prefix('\n')
                .or_else(|| rest.strip_prefix("\r\n"))
                .unwrap_or(rest),
            None => "",
        }
    }

    /// Render the full show-text for this commit: the header lines followed
    /// by the indented message, the way `git show --no-patch` prints it
    ///
    /// This is the input for squash-merge classification and metadata
    /// extraction.
    #[must_use]
    pub fn show_text(&self) -> String {
        let mut text = String::with_capacity(self.message.len() + 128);
        text.push_str("commit ");
        text.push_str(&self.sha);
        text.push('\n');
        text.push_str("Author: ");
        text.push_str(&self.author);
        text.push_str(" <");
        text.push_str(&self.author_email);
        text.push_str(">\n");
        text.push_str("Date:   ");
        text.push_str(
            &self
                .timestamp
                .format("%a %b %-d %H:%M:%S %Y %z")
                .to_string(),
        );
        text.push_str("\n\n");
        for line in self.message.lines() {
            text.push_str("    ");
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

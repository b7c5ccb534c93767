//! Configuration for the mergelog command
//!
//! This module provides the command-line surface and derived settings:
//! output mode lookup and logging level.

use std::path::PathBuf;

use clap::Parser;
use mergelog_core::OutputMode;

/// mergelog - changelog extractor for squash-merge git workflows
#[derive(Parser, Debug, Clone)]
#[command(name = "mergelog")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Revision range to list, in git's native range syntax
    ///
    /// Either a two-endpoint expression like `v1.0..HEAD` (exclusive
    /// start, inclusive end) or a single reference. When omitted, the
    /// range is resolved from --previous-commit, then from the most
    /// recent tag, then falls back to the entire history.
    pub range: Option<String>,

    /// Output format
    ///
    /// One of: commits, changes, tickets (alias: ticket), ticket_urls
    /// (alias: urls), merge_requests (alias: mr).
    #[arg(short, long, default_value = "changes")]
    pub format: String,

    /// Base space URL used to build ticket links
    ///
    /// When not supplied, derived from the fetch URL of the `origin`
    /// remote. When the repository has no remote, ticket references are
    /// printed raw.
    #[arg(short, long, env = "MERGELOG_SPACE_URL")]
    pub space_url: Option<String>,

    /// Commit of the previous successful run
    ///
    /// Used as the exclusive start of the range when no range argument
    /// is given, typically exported by CI.
    #[arg(short = 'p', long, env = "MERGELOG_PREVIOUS_COMMIT")]
    pub previous_commit: Option<String>,

    /// Path to the git repository (searched upward for a .git directory)
    #[arg(short, long, default_value = ".")]
    pub repo: PathBuf,

    /// Enable verbose diagnostics (debug level)
    ///
    /// Per-commit processing traces are written to stderr, keeping
    /// stdout as the data channel.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress warnings
    ///
    /// Only errors will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            range: None,
            format: "changes".to_string(),
            space_url: None,
            previous_commit: None,
            repo: PathBuf::from("."),
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Look up the requested output mode
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownFormat` for an unrecognized format
    /// name; callers must fail before processing any commit.
    pub fn output_mode(&self) -> Result<OutputMode, ConfigError> {
        OutputMode::from_name(&self.format).ok_or_else(|| ConfigError::UnknownFormat {
            name: self.format.clone(),
        })
    }

    /// Get the log level based on verbose/quiet flags
    ///
    /// Stdout carries only changelog data, so the default level is WARN
    /// and progress diagnostics appear only with --verbose.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Unrecognized output format name
    #[error("Unknown output format: {name}")]
    UnknownFormat {
        /// The format name that was not recognized
        name: String,
    },

    /// No space name could be derived from the remote URL
    #[error("Cannot derive a space name from remote URL: {remote}")]
    SpaceNameEmpty {
        /// The remote URL the derivation ran on
        remote: String,
    },
}

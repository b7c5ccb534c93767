// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Changelog run orchestration
//!
//! Resolves the run configuration (output mode, space URL, commit range)
//! once at startup, then streams one line per emitted item to the given
//! writer. Per-commit work is strictly sequential; the only external
//! calls are read-only history queries.

use std::io::Write;

use anyhow::Context;
use tracing::debug;

use crate::config::{Config, ConfigError};
use mergelog_core::{render_commit, space_url_from_remote};
use mergelog_git::{GitRepo, RangeSpec};

/// Remote whose fetch URL seeds space-URL derivation
const DEFAULT_REMOTE: &str = "origin";

/// Run the changelog extraction described by `config`, writing one line
/// per emitted item to `out`
///
/// # Errors
///
/// Fails before any commit is processed on configuration problems
/// (unknown output format, empty derived space name) and on range
/// resolution failures. Per-commit absence of tickets or merge-request
/// URLs is not an error.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    // Unknown formats are rejected up front, never once per commit
    let mode = config.output_mode()?;

    let repo = GitRepo::discover(&config.repo)?;
    if let Ok(sha) = repo.head_sha() {
        debug!(head = %sha, "repository opened");
    }

    let space_url = resolve_space_url(config, &repo)?;
    match &space_url {
        Some(url) => debug!(space_url = %url, "space URL resolved"),
        None => debug!("no space URL; ticket references stay raw"),
    }

    let range = resolve_range(config, &repo)?;
    debug!(range = %range, "range resolved");

    let commits = repo.list_commits(&range)?;
    for commit in &commits {
        for line in render_commit(mode, commit, space_url.as_deref()) {
            writeln!(out, "{line}").context("write output line")?;
        }
    }
    Ok(())
}

/// Resolve the space URL once at startup
///
/// Priority: explicit value (flag or environment), then derivation from
/// the default remote's fetch URL. A repository without that remote gets
/// no space URL and ticket references stay raw; a remote from which no
/// name can be derived is a fatal configuration error.
fn resolve_space_url(config: &Config, repo: &GitRepo) -> anyhow::Result<Option<String>> {
    if let Some(url) = config.space_url.as_deref().filter(|u| !u.is_empty()) {
        return Ok(Some(url.to_string()));
    }
    match repo.remote_url(DEFAULT_REMOTE)? {
        Some(remote) => {
            let url = space_url_from_remote(&remote).ok_or(ConfigError::SpaceNameEmpty { remote })?;
            Ok(Some(url))
        }
        None => Ok(None),
    }
}

/// Resolve the commit range once at startup
///
/// Priority: explicit range argument, then the previous successful
/// commit, then the most recent tag. Falls back to the entire history.
/// Empty values are treated as unset.
fn resolve_range(config: &Config, repo: &GitRepo) -> Result<RangeSpec, mergelog_git::GitError> {
    if let Some(expr) = &config.range {
        return Ok(RangeSpec::parse(expr));
    }
    if let Some(previous) = config.previous_commit.as_deref().filter(|p| !p.is_empty()) {
        debug!(previous = %previous, "range from previous successful commit");
        return Ok(RangeSpec::since(previous));
    }
    if let Some(tag) = repo.latest_tag()? {
        debug!(tag = %tag, "range from most recent tag");
        return Ok(RangeSpec::since(&tag));
    }
    debug!("no range boundary found; listing entire history");
    Ok(RangeSpec::All)
}

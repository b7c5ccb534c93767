// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Git repository access
//!
//! This module wraps the `git2` crate behind the four read-only queries the
//! changelog pipeline needs: list the commits in a range (oldest first,
//! true merges excluded), fetch a single commit, find the most recent tag,
//! and read a remote's fetch URL.

use crate::commit::Commit;
use crate::error::GitError;
use chrono::{TimeZone, Utc};
use git2::{Repository, Sort};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// A resolved commit range
///
/// Carries the range in the history store's native syntax; endpoint
/// expressions are passed through to git untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSpec {
    /// A two-endpoint expression (`start..end`): exclusive start,
    /// inclusive end
    Range(String),
    /// A single open-ended reference: everything reachable from it
    Reference(String),
    /// The entire history reachable from HEAD
    All,
}

impl RangeSpec {
    /// Classify a user-supplied range expression
    ///
    /// Expressions containing `..` are treated as two-endpoint ranges and
    /// handed to git verbatim; anything else is a single reference.
    #[must_use]
    pub fn parse(expr: &str) -> Self {
        if expr.contains("..") {
            Self::Range(expr.to_string())
        } else {
            Self::Reference(expr.to_string())
        }
    }

    /// Build the range from an exclusive start marker up to HEAD
    #[must_use]
    pub fn since(start: &str) -> Self {
        Self::Range(format!("{start}..HEAD"))
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(expr) => f.write_str(expr),
            Self::Reference(reference) => f.write_str(reference),
            Self::All => f.write_str("(entire history)"),
        }
    }
}

/// A git repository wrapper for reading changelog history
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory. The
    /// upward search honors the `GIT_CEILING_DIRECTORIES` stop list, as
    /// git does.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let ceiling = std::env::var_os("GIT_CEILING_DIRECTORIES").unwrap_or_default();
        let repo = Repository::discover_path(path, std::env::split_paths(&ceiling))
            .and_then(Repository::open)
            .map_err(|_| GitError::RepositoryNotFound {
                path: path.display().to_string(),
            })?;
        Ok(Self { repo })
    }

    /// Get the working directory path (None for bare repos)
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// List the commits in the given range, oldest first
    ///
    /// True merge commits (two or more parents) are excluded; squash-merge
    /// commits are single-parent and pass through. Each commit's data is
    /// read from the store exactly once.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RangeNotFound` if the range cannot be resolved
    /// and `GitError::Git2` for any other repository failure.
    pub fn list_commits(&self, range: &RangeSpec) -> Result<Vec<Commit>, GitError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME | Sort::REVERSE)?;

        match range {
            RangeSpec::All => revwalk.push_head()?,
            RangeSpec::Reference(reference) => {
                let commit = self
                    .repo
                    .revparse_single(reference)
                    .and_then(|obj| obj.peel_to_commit())
                    .map_err(|_| GitError::RangeNotFound {
                        range: reference.clone(),
                    })?;
                revwalk.push(commit.id())?;
            }
            RangeSpec::Range(expr) => {
                revwalk
                    .push_range(expr)
                    .map_err(|_| GitError::RangeNotFound {
                        range: expr.clone(),
                    })?;
            }
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let git_commit = self.repo.find_commit(oid)?;
            let commit = extract_commit(&git_commit);
            if commit.is_merge() {
                continue;
            }
            commits.push(commit);
        }

        debug!(range = %range, count = commits.len(), "listed commits");
        Ok(commits)
    }

    /// Get a single commit by SHA or reference
    ///
    /// # Errors
    ///
    /// Returns `GitError::RangeNotFound` if the reference cannot be resolved.
    pub fn get_commit(&self, reference: &str) -> Result<Commit, GitError> {
        let git_commit = self
            .repo
            .revparse_single(reference)
            .and_then(|obj| obj.peel_to_commit())
            .map_err(|_| GitError::RangeNotFound {
                range: reference.to_string(),
            })?;
        Ok(extract_commit(&git_commit))
    }

    /// Get the HEAD commit SHA
    ///
    /// # Errors
    ///
    /// Returns `GitError` if HEAD cannot be resolved.
    pub fn head_sha(&self) -> Result<String, GitError> {
        let head = self.repo.head()?;
        let oid = head.target().ok_or_else(|| GitError::RangeNotFound {
            range: "HEAD".to_string(),
        })?;
        Ok(oid.to_string())
    }

    /// Find the most recent tag reachable from HEAD
    ///
    /// Returns `Ok(None)` when the repository has no tags (or no commits
    /// yet); any other failure is an error.
    ///
    /// # Errors
    ///
    /// Returns `GitError::Git2` if the repository cannot be described.
    pub fn latest_tag(&self) -> Result<Option<String>, GitError> {
        let mut opts = git2::DescribeOptions::new();
        opts.describe_tags();

        match self.repo.describe(&opts) {
            Ok(description) => {
                let mut format = git2::DescribeFormatOptions::new();
                format.abbreviated_size(0);
                let tag = description.format(Some(&format))?;
                Ok(Some(tag))
            }
            Err(e)
                if e.code() == git2::ErrorCode::NotFound
                    || e.code() == git2::ErrorCode::UnbornBranch =>
            {
                Ok(None)
            }
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// Read the fetch URL of the named remote
    ///
    /// Returns `Ok(None)` when the remote does not exist or its URL is not
    /// valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `GitError::Git2` for repository failures other than a
    /// missing remote.
    pub fn remote_url(&self, name: &str) -> Result<Option<String>, GitError> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(String::from)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(GitError::Git2(e)),
        }
    }
}

/// Extract commit metadata from a git2 commit
fn extract_commit(git_commit: &git2::Commit<'_>) -> Commit {
    let time = git_commit.time();
    let timestamp = Utc
        .timestamp_opt(time.seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    Commit {
        sha: git_commit.id().to_string(),
        message: git_commit.message().unwrap_or("").to_string(),
        author: git_commit.author().name().unwrap_or("Unknown").to_string(),
        author_email: git_commit.author().email().unwrap_or("").to_string(),
        timestamp,
        parents: git_commit.parents().map(|p| p.id().to_string()).collect(),
    }
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! mergelog-git: Git history access for mergelog
//!
//! This library crate reads commit history from a git repository for the
//! mergelog changelog extractor.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use mergelog_git::{GitRepo, RangeSpec};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let commits = repo.list_commits(&RangeSpec::parse("v1.0..HEAD"))
//!     .expect("list commits");
//!
//! for c in commits {
//!     println!("{} - {}", c.short_sha(), c.summary());
//! }
//! ```

pub mod commit;
pub mod error;
pub mod repo;

pub use commit::Commit;
pub use error::GitError;
pub use repo::{GitRepo, RangeSpec};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::Commit;
    pub use crate::error::GitError;
    pub use crate::repo::{GitRepo, RangeSpec};
}

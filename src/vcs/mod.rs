//! Version-control query interface
//!
//! Three read-only queries against a working directory. Everything above this
//! module talks to [`VersionControl`]; the implementations decide how the
//! repository is actually read.

pub mod git_cli;
pub mod libgit2;

pub use git_cli::GitCli;
pub use libgit2::Git2Backend;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::RepositoryQueryError;

/// Length of the abbreviated head id.
pub const SHORT_ID_LEN: usize = 10;

/// Working directory of the repository to query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle(PathBuf);

impl RepositoryHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Default for RepositoryHandle {
    /// The current directory
    fn default() -> Self {
        Self(PathBuf::from("."))
    }
}

impl fmt::Display for RepositoryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Read-only queries against a repository's history.
pub trait VersionControl {
    /// Abbreviated id of the head commit, [`SHORT_ID_LEN`] hex characters.
    fn short_revision_id(&self, repo: &RepositoryHandle) -> Result<String, RepositoryQueryError>;

    /// Tag-based describe string for head.
    ///
    /// Fails when no tag is reachable, in addition to the failures shared
    /// with the other queries.
    fn describe_version(&self, repo: &RepositoryHandle) -> Result<String, RepositoryQueryError>;

    /// Author time of the head commit, seconds since the Unix epoch.
    fn last_commit_timestamp(&self, repo: &RepositoryHandle)
        -> Result<i64, RepositoryQueryError>;
}

/// Which [`VersionControl`] implementation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Shell out to the `git` binary
    #[default]
    GitCli,
    /// Read the repository in-process with libgit2
    Libgit2,
}

impl Backend {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "git" | "cli" => Some(Backend::GitCli),
            "libgit2" | "git2" => Some(Backend::Libgit2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::GitCli => "git",
            Backend::Libgit2 => "libgit2",
        }
    }

    /// Instantiate the backend
    pub fn create(&self) -> Box<dyn VersionControl> {
        match self {
            Backend::GitCli => Box::new(GitCli::new()),
            Backend::Libgit2 => Box::new(Git2Backend::new()),
        }
    }
}

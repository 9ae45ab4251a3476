//! Error type for version-control queries.

use std::process::ExitStatus;

use crate::error_codes;

/// A failed query against a repository.
///
/// Covers every way the three underlying queries can go wrong: the tool
/// could not be started, it exited non-zero (not a repository, no commits,
/// no tags for describe), or it produced output that could not be used.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryQueryError {
    /// The query tool could not be launched (missing binary, bad working directory)
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The query tool ran but reported failure
    #[error("`{command}` exited with {status}: {stderr}")]
    Exit {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The query tool wrote something other than UTF-8
    #[error("`{command}` produced non-UTF-8 output")]
    InvalidUtf8 { command: String },

    /// Commit timestamp did not parse, or has no calendar date
    #[error("invalid commit timestamp: {raw:?}")]
    InvalidTimestamp { raw: String },

    /// libgit2 failure
    #[error("git error: {0}")]
    Git(#[from] git2::Error),
}

impl RepositoryQueryError {
    /// Stable error code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            RepositoryQueryError::Spawn { .. } => error_codes::DOC_IO_001_SPAWN_FAILED,
            RepositoryQueryError::Exit { .. } => error_codes::DOC_GIT_001_QUERY_FAILED,
            RepositoryQueryError::InvalidUtf8 { .. } => error_codes::DOC_V_001_INVALID_UTF8,
            RepositoryQueryError::InvalidTimestamp { .. } => {
                error_codes::DOC_V_002_INVALID_TIMESTAMP
            }
            RepositoryQueryError::Git(_) => error_codes::DOC_GIT_002_LIBGIT2,
        }
    }
}

//! docdate: a `\date{}` line from a repository's history
//!
//! docdate asks a git repository for the date of its last commit and a
//! version label, and renders both as a LaTeX macro:
//!
//! ```text
//! \date{November 14, 2023 (v1.2.0-3-gabcdef1)}
//! ```
//!
//! # Version selection
//!
//! The version is the `git describe` string (nearest annotated tag, distance,
//! abbreviated id). When describe fails for any reason, the 10-character
//! short id of head is used instead.
//!
//! # Backends
//!
//! - [`GitCli`]: runs the `git` binary (default)
//! - [`Git2Backend`]: reads the repository in-process through libgit2
//!
//! Both implement [`VersionControl`], the seam used to test the resolution
//! logic without a repository.

pub mod dater;
pub mod error;
pub mod error_codes;
pub mod output;
pub mod vcs;
pub mod version;

pub use dater::{
    compute_date_and_version, compute_date_and_version_utc, describe_version,
    format_commit_date, last_commit_date, resolve_date_and_version,
    resolve_date_and_version_in, resolve_version, short_revision_id, DateAndVersion,
    RevisionDescriptor, Version, DATE_FORMAT,
};
pub use error::RepositoryQueryError;
pub use output::{
    generate_execution_id, output_json, DateVersionResponse, ErrorResponse, JsonResponse,
    OutputFormat,
};
pub use vcs::{Backend, Git2Backend, GitCli, RepositoryHandle, VersionControl, SHORT_ID_LEN};

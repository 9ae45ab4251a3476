//! Date and version resolution
//!
//! Combines the three [`VersionControl`] queries into the `\date{}` line:
//! the head commit's date, and the describe string or, failing that, the
//! short id.
//!
//! # Fallback policy
//!
//! Any failure of the describe query is recovered by asking for the short
//! id instead; "no tags" and "not a repository" are not told apart there.
//! Failures of the timestamp and short-id queries propagate.

use std::fmt;

use chrono::{Local, TimeZone, Utc};
use serde::Serialize;

use crate::error::RepositoryQueryError;
use crate::vcs::{RepositoryHandle, VersionControl};

/// `strftime` pattern for the date portion: "March 07, 2024"
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// Where the version token came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Version {
    /// Tag-based describe string
    Describe(String),
    /// Abbreviated head id, used when describe failed
    ShortId(String),
}

impl Version {
    pub fn as_str(&self) -> &str {
        match self {
            Version::Describe(s) | Version::ShortId(s) => s,
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Version::Describe(_) => "describe",
            Version::ShortId(_) => "short_id",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What was learned about head on one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionDescriptor {
    /// Author time of the head commit, seconds since the epoch
    pub commit_timestamp: i64,
    pub version: Version,
}

/// The formatted result; `Display` renders the `\date{}` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAndVersion {
    /// Date portion, already formatted with [`DATE_FORMAT`]
    pub date: String,
    pub revision: RevisionDescriptor,
}

impl fmt::Display for DateAndVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\date{{{} ({})}}", self.date, self.revision.version)
    }
}

/// Render a Unix timestamp as "<FullMonth> <DD>, <YYYY>" in `tz`.
pub fn format_commit_date<Tz>(timestamp: i64, tz: &Tz) -> Result<String, RepositoryQueryError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let when = tz
        .timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| RepositoryQueryError::InvalidTimestamp {
            raw: timestamp.to_string(),
        })?;
    Ok(when.format(DATE_FORMAT).to_string())
}

/// Short id of head.
pub fn short_revision_id(
    vcs: &dyn VersionControl,
    repo: &RepositoryHandle,
) -> Result<String, RepositoryQueryError> {
    vcs.short_revision_id(repo)
}

/// Describe string of head; fails when no tag is reachable.
pub fn describe_version(
    vcs: &dyn VersionControl,
    repo: &RepositoryHandle,
) -> Result<String, RepositoryQueryError> {
    vcs.describe_version(repo)
}

/// Date of the last commit on head, formatted in `tz`.
pub fn last_commit_date<Tz>(
    vcs: &dyn VersionControl,
    repo: &RepositoryHandle,
    tz: &Tz,
) -> Result<String, RepositoryQueryError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let timestamp = vcs.last_commit_timestamp(repo)?;
    format_commit_date(timestamp, tz)
}

/// Describe string if there is one, otherwise the short id.
pub fn resolve_version(
    vcs: &dyn VersionControl,
    repo: &RepositoryHandle,
) -> Result<Version, RepositoryQueryError> {
    match vcs.describe_version(repo) {
        Ok(described) => Ok(Version::Describe(described)),
        // Every describe failure falls back, whatever its kind.
        Err(err) => {
            tracing::debug!(repo = %repo, error = %err, "describe failed, using short id");
            Ok(Version::ShortId(vcs.short_revision_id(repo)?))
        }
    }
}

/// Resolve date and version, formatting the date in `tz`.
pub fn resolve_date_and_version_in<Tz>(
    vcs: &dyn VersionControl,
    repo: &RepositoryHandle,
    tz: &Tz,
) -> Result<DateAndVersion, RepositoryQueryError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let commit_timestamp = vcs.last_commit_timestamp(repo)?;
    let date = format_commit_date(commit_timestamp, tz)?;
    let version = resolve_version(vcs, repo)?;

    Ok(DateAndVersion {
        date,
        revision: RevisionDescriptor {
            commit_timestamp,
            version,
        },
    })
}

/// Resolve date and version in the local time zone.
pub fn resolve_date_and_version(
    vcs: &dyn VersionControl,
    repo: &RepositoryHandle,
) -> Result<DateAndVersion, RepositoryQueryError> {
    resolve_date_and_version_in(vcs, repo, &Local)
}

/// The `\date{<date> (<version>)}` line, date in local time.
pub fn compute_date_and_version(
    vcs: &dyn VersionControl,
    repo: &RepositoryHandle,
) -> Result<String, RepositoryQueryError> {
    Ok(resolve_date_and_version(vcs, repo)?.to_string())
}

/// Same as [`compute_date_and_version`] with the date taken in UTC.
pub fn compute_date_and_version_utc(
    vcs: &dyn VersionControl,
    repo: &RepositoryHandle,
) -> Result<String, RepositoryQueryError> {
    Ok(resolve_date_and_version_in(vcs, repo, &Utc)?.to_string())
}

//! Queries answered in-process through libgit2.

use git2::{DescribeFormatOptions, DescribeOptions, Repository};

use super::{RepositoryHandle, VersionControl, SHORT_ID_LEN};
use crate::error::RepositoryQueryError;

/// Hash length in describe output when `core.abbrev` is unset or `auto`
const DEFAULT_ABBREV: u32 = 7;

/// Reads the repository with `git2`; needs no git binary.
///
/// The repository is discovered from the handle on every query, walking up
/// through parent directories the way the git CLI does.
#[derive(Debug, Clone, Copy, Default)]
pub struct Git2Backend;

impl Git2Backend {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, repo: &RepositoryHandle) -> Result<Repository, RepositoryQueryError> {
        tracing::debug!(repo = %repo, "opening repository with libgit2");
        Ok(Repository::discover(repo.path())?)
    }
}

impl VersionControl for Git2Backend {
    fn short_revision_id(&self, repo: &RepositoryHandle) -> Result<String, RepositoryQueryError> {
        let repository = self.open(repo)?;
        let head = repository.head()?.peel_to_commit()?;
        let mut id = head.id().to_string();
        id.truncate(SHORT_ID_LEN);
        Ok(id)
    }

    fn describe_version(&self, repo: &RepositoryHandle) -> Result<String, RepositoryQueryError> {
        let repository = self.open(repo)?;
        // Annotated tags only, matching plain `git describe`
        let describe = repository.describe(&DescribeOptions::new())?;
        let abbrev = repository
            .config()?
            .get_string("core.abbrev")
            .ok()
            .map_or(DEFAULT_ABBREV, |value| parse_abbrev(&value));
        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(abbrev);
        let described = describe.format(Some(&format))?;
        Ok(described)
    }

    fn last_commit_timestamp(
        &self,
        repo: &RepositoryHandle,
    ) -> Result<i64, RepositoryQueryError> {
        let repository = self.open(repo)?;
        let head = repository.head()?.peel_to_commit()?;
        let seconds = head.author().when().seconds();
        Ok(seconds)
    }
}

/// Interpret a `core.abbrev` value the way git does: a length clamped to
/// 4..=40, `no` for the full id, anything else the default.
fn parse_abbrev(value: &str) -> u32 {
    let value = value.trim();
    if value.eq_ignore_ascii_case("no") {
        return 40;
    }
    value
        .parse::<u32>()
        .map(|n| n.clamp(4, 40))
        .unwrap_or(DEFAULT_ABBREV)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_abbrev() {
        assert_eq!(parse_abbrev("12"), 12);
        assert_eq!(parse_abbrev(" 9 "), 9);
        assert_eq!(parse_abbrev("2"), 4);
        assert_eq!(parse_abbrev("99"), 40);
        assert_eq!(parse_abbrev("no"), 40);
        assert_eq!(parse_abbrev("auto"), DEFAULT_ABBREV);
        assert_eq!(parse_abbrev(""), DEFAULT_ABBREV);
    }
}

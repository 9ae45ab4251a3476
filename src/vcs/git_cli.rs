//! Queries answered by running the `git` binary.

use std::ffi::OsString;
use std::process::Command;

use super::{RepositoryHandle, VersionControl, SHORT_ID_LEN};
use crate::error::RepositoryQueryError;

/// Shells out to git with the repository as working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Run `program` instead of `git`, with the same arguments
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Whether the program can be found on PATH
    pub fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn run(&self, repo: &RepositoryHandle, args: &[&str]) -> Result<String, RepositoryQueryError> {
        let program = self.program.to_string_lossy().into_owned();
        let command = format!("{} {}", program, args.join(" "));
        tracing::debug!(repo = %repo, %command, "running git query");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(repo.path())
            .output()
            .map_err(|source| RepositoryQueryError::Spawn { program, source })?;

        if !output.status.success() {
            return Err(RepositoryQueryError::Exit {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout)
            .map_err(|_| RepositoryQueryError::InvalidUtf8 { command })
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    fn short_revision_id(&self, repo: &RepositoryHandle) -> Result<String, RepositoryQueryError> {
        let short = format!("--short={}", SHORT_ID_LEN);
        let out = self.run(repo, &["rev-parse", short.as_str(), "HEAD"])?;
        Ok(out.trim().to_string())
    }

    fn describe_version(&self, repo: &RepositoryHandle) -> Result<String, RepositoryQueryError> {
        let out = self.run(repo, &["describe"])?;
        Ok(out.trim().to_string())
    }

    fn last_commit_timestamp(
        &self,
        repo: &RepositoryHandle,
    ) -> Result<i64, RepositoryQueryError> {
        let out = self.run(repo, &["log", "-1", "--format=format:%at"])?;
        parse_timestamp(&out)
    }
}

/// Parse `%at` output (decimal seconds since the epoch)
fn parse_timestamp(raw: &str) -> Result<i64, RepositoryQueryError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| RepositoryQueryError::InvalidTimestamp {
            raw: raw.to_string(),
        })
}

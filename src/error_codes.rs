//! docdate error codes
//!
//! Error codes follow the pattern: DOC-{CATEGORY}-{3-digit number}
//!
//! Categories (1-3 uppercase letters):
//! - IO: the query tool could not be run
//! - GIT: the repository query itself failed
//! - V: query output could not be interpreted
//!
//! Each error code is stable and should not be reused.
//!
//! | Code | Description | Remediation |
//! |------|-------------|-------------|
//! | DOC-IO-001 | Query tool could not be launched | Install git, or run with `--backend libgit2`; check `--repo` exists |
//! | DOC-GIT-001 | Query failed | Check `--repo` points at a git working tree with at least one commit |
//! | DOC-GIT-002 | libgit2 error | Same as DOC-GIT-001 |
//! | DOC-V-001 | Non-UTF-8 output | Check tag names and the git binary in use |
//! | DOC-V-002 | Invalid timestamp | Inspect `git log -1 --format=%at` in the repository |

/// Query tool could not be launched
pub const DOC_IO_001_SPAWN_FAILED: &str = "DOC-IO-001";

/// Query tool exited non-zero (not a repository, no commits, no tags)
pub const DOC_GIT_001_QUERY_FAILED: &str = "DOC-GIT-001";

/// libgit2 reported an error
pub const DOC_GIT_002_LIBGIT2: &str = "DOC-GIT-002";

/// Query output was not UTF-8
pub const DOC_V_001_INVALID_UTF8: &str = "DOC-V-001";

/// Commit timestamp unparseable or out of range
pub const DOC_V_002_INVALID_TIMESTAMP: &str = "DOC-V-002";

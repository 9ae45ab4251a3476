//! Tests for the git CLI backend
//!
//! Scratch repositories are built with git2 and then queried through the
//! `git` binary. Every test returns early when git is not on PATH.

use chrono::Utc;
use docdate::{
    compute_date_and_version_utc, resolve_date_and_version_in, Git2Backend, GitCli,
    RepositoryHandle, RepositoryQueryError, Version, VersionControl, SHORT_ID_LEN,
};
use git2::{Commit, Oid, Repository, Signature, Time};
use tempfile::TempDir;

const FIRST_COMMIT_TIME: i64 = 1_700_000_000;
const SECOND_COMMIT_TIME: i64 = 1_709_812_800;

fn git_or_skip() -> Option<GitCli> {
    let git = GitCli::new();
    if git.is_available() {
        Some(git)
    } else {
        eprintln!("git not found on PATH, skipping");
        None
    }
}

fn signature(time: i64) -> Signature<'static> {
    Signature::new("Doc Writer", "doc@example.com", &Time::new(time, 0)).unwrap()
}

fn commit(repo: &Repository, time: i64, message: &str) -> Oid {
    let sig = signature(time);
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

fn annotated_tag(repo: &Repository, name: &str, target: Oid) {
    let object = repo.find_object(target, None).unwrap();
    repo.tag(name, &object, &signature(FIRST_COMMIT_TIME), "release", false)
        .unwrap();
}

#[test]
fn test_tagged_head_reports_tag() {
    let Some(git) = git_or_skip() else { return };
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();
    let oid = commit(&repo, FIRST_COMMIT_TIME, "initial");
    annotated_tag(&repo, "v1.0.0", oid);

    let handle = RepositoryHandle::new(temp_dir.path());
    let out = compute_date_and_version_utc(&git, &handle).unwrap();

    assert_eq!(out, "\\date{November 14, 2023 (v1.0.0)}");
}

#[test]
fn test_untagged_repo_uses_short_id() {
    let Some(git) = git_or_skip() else { return };
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();
    let oid = commit(&repo, FIRST_COMMIT_TIME, "initial");

    let handle = RepositoryHandle::new(temp_dir.path());
    assert!(matches!(
        git.describe_version(&handle),
        Err(RepositoryQueryError::Exit { .. })
    ));

    let resolved = resolve_date_and_version_in(&git, &handle, &Utc).unwrap();
    assert_eq!(
        resolved.revision.version,
        Version::ShortId(oid.to_string()[..SHORT_ID_LEN].to_string())
    );
    assert_eq!(resolved.to_string().len(), "\\date{November 14, 2023 ()}".len() + SHORT_ID_LEN);
}

#[test]
fn test_backends_agree() {
    let Some(git) = git_or_skip() else { return };
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();
    let oid = commit(&repo, FIRST_COMMIT_TIME, "initial");
    annotated_tag(&repo, "v2.1", oid);
    commit(&repo, SECOND_COMMIT_TIME, "second");

    let handle = RepositoryHandle::new(temp_dir.path());
    let libgit2 = Git2Backend::new();

    assert_eq!(
        git.short_revision_id(&handle).unwrap(),
        libgit2.short_revision_id(&handle).unwrap()
    );
    assert_eq!(
        git.last_commit_timestamp(&handle).unwrap(),
        SECOND_COMMIT_TIME
    );
    assert_eq!(
        libgit2.last_commit_timestamp(&handle).unwrap(),
        SECOND_COMMIT_TIME
    );
    assert_eq!(
        git.describe_version(&handle).unwrap(),
        libgit2.describe_version(&handle).unwrap()
    );
}

#[test]
fn test_backends_agree_on_configured_abbrev() {
    let Some(git) = git_or_skip() else { return };
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();
    repo.config().unwrap().set_i32("core.abbrev", 12).unwrap();
    let oid = commit(&repo, FIRST_COMMIT_TIME, "initial");
    annotated_tag(&repo, "v1", oid);
    let head = commit(&repo, SECOND_COMMIT_TIME, "second");

    let handle = RepositoryHandle::new(temp_dir.path());
    let from_cli = git.describe_version(&handle).unwrap();
    let from_libgit2 = Git2Backend::new().describe_version(&handle).unwrap();

    assert_eq!(from_cli, format!("v1-1-g{}", &head.to_string()[..12]));
    assert_eq!(from_cli, from_libgit2);
}

#[test]
fn test_non_repository_path_fails() {
    let Some(git) = git_or_skip() else { return };
    let temp_dir = TempDir::new().unwrap();
    let handle = RepositoryHandle::new(temp_dir.path());

    let err = compute_date_and_version_utc(&git, &handle).unwrap_err();
    assert!(matches!(err, RepositoryQueryError::Exit { .. }), "{:?}", err);
}

#[test]
fn test_missing_directory_fails_to_spawn() {
    let Some(git) = git_or_skip() else { return };
    let temp_dir = TempDir::new().unwrap();
    let handle = RepositoryHandle::new(temp_dir.path().join("does-not-exist"));

    let err = compute_date_and_version_utc(&git, &handle).unwrap_err();
    assert!(matches!(err, RepositoryQueryError::Spawn { .. }), "{:?}", err);
}

#[test]
fn test_repository_without_commits_fails() {
    let Some(git) = git_or_skip() else { return };
    let temp_dir = TempDir::new().unwrap();
    Repository::init(temp_dir.path()).unwrap();
    let handle = RepositoryHandle::new(temp_dir.path());

    assert!(compute_date_and_version_utc(&git, &handle).is_err());
}

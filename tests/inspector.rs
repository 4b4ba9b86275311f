//! Inspector tests against real git repositories.

mod common;

use std::path::Path;
use std::sync::Arc;

use revdate::adapters::live::clock::LiveClock;
use revdate::adapters::live::git::LiveGitHistory;
use revdate::adapters::memory::MemorySink;
use revdate::ci::{CiEnvironment, ShallowCloneAdvisory};
use revdate::context::ServiceContext;
use revdate::{Error, RepositoryInspector};

fn inspector_with(root: &Path, ci: CiEnvironment) -> (RepositoryInspector, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let ctx = ServiceContext::new(
        Box::new(LiveGitHistory::open(root).unwrap()),
        Box::new(LiveClock),
        Box::new(Arc::clone(&sink)),
        ci,
    );
    (RepositoryInspector::new(ctx), sink)
}

#[test]
fn last_modified_is_the_most_recent_commit_for_the_path() {
    let dir = tempfile::tempdir().unwrap();
    common::docs_repo(dir.path());
    let inspector = RepositoryInspector::open(dir.path()).unwrap();

    let index = inspector.last_modified(Path::new("docs/index.md")).unwrap();
    let guide = inspector.last_modified(Path::new("docs/guide.md")).unwrap();
    assert_eq!(index, Some(1_706_745_600));
    assert_eq!(guide, Some(1_704_153_600));
}

#[test]
fn untracked_file_has_no_history() {
    let dir = tempfile::tempdir().unwrap();
    common::docs_repo(dir.path());
    std::fs::write(dir.path().join("docs/draft.md"), "# Draft\n").unwrap();
    let (inspector, sink) = inspector_with(dir.path(), CiEnvironment::default());

    assert_eq!(inspector.last_modified(Path::new("docs/draft.md")).unwrap(), None);

    let dates = inspector.revision_date(Path::new("docs/draft.md"), "en").unwrap();
    assert_eq!(dates.iso_date.len(), "2024-01-01".len());
    assert_eq!(sink.warnings(), vec!["docs/draft.md has no git logs, using current timestamp"]);
}

#[test]
fn revision_date_renders_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    common::docs_repo(dir.path());
    let inspector = RepositoryInspector::open(dir.path()).unwrap();

    let dates = inspector.revision_date(Path::new("docs/guide.md"), "en").unwrap();
    assert_eq!(dates.date, "January 2, 2024");
    assert_eq!(dates.iso_datetime, "2024-01-02 00:00:00");
    assert!(dates.timeago.contains("datetime='1704153600000'"));
}

#[test]
fn opening_a_plain_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = RepositoryInspector::open(dir.path()).err().unwrap();
    assert!(matches!(err, Error::RepositoryNotFound { .. }));
}

#[test]
fn full_clone_is_quiet_on_ci() {
    let dir = tempfile::tempdir().unwrap();
    common::docs_repo(dir.path());
    let ci = CiEnvironment { gitlab_ci: true, github_actions: true };
    let (inspector, sink) = inspector_with(dir.path(), ci);

    assert!(!inspector.shallow_clone_check().shallow);
    assert!(sink.warnings().is_empty());
}

#[test]
fn shallow_clone_warns_once_per_construction() {
    let origin = tempfile::tempdir().unwrap();
    common::docs_repo(origin.path());
    let clone = tempfile::tempdir().unwrap();
    let url = format!("file://{}", origin.path().display());
    common::git(clone.path(), &["clone", "-q", "--depth", "1", &url, "."], 1_704_067_200);
    assert!(clone.path().join(".git/shallow").exists());

    let github = CiEnvironment { gitlab_ci: false, github_actions: true };
    let (inspector, sink) = inspector_with(clone.path(), github);
    let check = inspector.shallow_clone_check();
    assert_eq!(check.n_commits, Some(1));
    assert_eq!(check.advisory, Some(ShallowCloneAdvisory::GitHubActions));
    assert_eq!(sink.warnings().len(), 1);

    // Depth 1 only sees the tip, so every file appears to date from it.
    let guide = inspector.last_modified(Path::new("docs/guide.md")).unwrap();
    assert_eq!(guide, Some(1_706_745_600));

    let (_, sink) = inspector_with(clone.path(), CiEnvironment::default());
    assert!(sink.warnings().is_empty());
}

#[test]
fn paths_are_matched_literally_not_as_globs() {
    let dir = tempfile::tempdir().unwrap();
    common::git(dir.path(), &["init", "-q"], 1_800_000_000);
    common::commit_file(dir.path(), "docs/a.md", "# A\n", 1_800_000_000);
    std::fs::write(dir.path().join("docs/[a].md"), "# Bracketed\n").unwrap();
    let inspector = RepositoryInspector::open(dir.path()).unwrap();

    assert_eq!(inspector.last_modified(Path::new("docs/a.md")).unwrap(), Some(1_800_000_000));
    assert_eq!(inspector.last_modified(Path::new("docs/[a].md")).unwrap(), None);
    assert_eq!(inspector.last_modified(Path::new("docs/*.md")).unwrap(), None);
}

#[test]
fn linked_worktree_of_a_shallow_clone_is_shallow() {
    let origin = tempfile::tempdir().unwrap();
    common::docs_repo(origin.path());
    let clone = tempfile::tempdir().unwrap();
    let url = format!("file://{}", origin.path().display());
    common::git(clone.path(), &["clone", "-q", "--depth", "1", &url, "."], 1_704_067_200);

    let parent = tempfile::tempdir().unwrap();
    let worktree = parent.path().join("wt");
    let worktree_arg = worktree.to_string_lossy().into_owned();
    common::git(clone.path(), &["worktree", "add", "--detach", &worktree_arg], 1_704_067_200);

    let gitlab = CiEnvironment { gitlab_ci: true, github_actions: false };
    let (inspector, sink) = inspector_with(&worktree, gitlab);
    let check = inspector.shallow_clone_check();
    assert!(check.shallow);
    assert_eq!(check.advisory, Some(ShallowCloneAdvisory::GitLab));
    assert_eq!(sink.warnings().len(), 1);
}

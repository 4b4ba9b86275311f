//! Helpers for building throwaway git repositories.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

/// Runs git in `dir` with a fixed identity and commit date.
pub fn git(dir: &Path, args: &[&str], date: i64) {
    let date = format!("{date} +0000");
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["-c", "user.name=Docs Bot", "-c", "user.email=docs@example.com"])
        .args(["-c", "commit.gpgsign=false", "-c", "init.defaultBranch=main"])
        .args(args)
        .env("GIT_AUTHOR_DATE", &date)
        .env("GIT_COMMITTER_DATE", &date)
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {args:?} failed");
}

/// Writes `content` to `name` and commits it at `date`.
pub fn commit_file(dir: &Path, name: &str, content: &str, date: i64) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    git(dir, &["add", name], date);
    git(dir, &["commit", "-q", "-m", &format!("update {name}")], date);
}

/// Creates a repository with two documentation pages committed at known dates.
///
/// `docs/index.md` last changed 2024-02-01, `docs/guide.md` on 2024-01-02.
pub fn docs_repo(dir: &Path) {
    git(dir, &["init", "-q"], 1_704_067_200);
    commit_file(dir, "docs/index.md", "# Home\n", 1_704_067_200);
    commit_file(dir, "docs/guide.md", "# Guide\n", 1_704_153_600);
    commit_file(dir, "docs/index.md", "# Home\n\nUpdated.\n", 1_706_745_600);
}

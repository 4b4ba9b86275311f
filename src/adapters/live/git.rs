//! Live history adapter using `git` CLI commands.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::ports::history::HistorySource;

/// Marker git writes into the common metadata directory when history is truncated.
const SHALLOW_MARKER: &str = "shallow";

/// Live history adapter that shells out to `git -C <root>`.
///
/// Paths passed to queries are relative to `root`.
#[derive(Debug, Clone)]
pub struct LiveGitHistory {
    root: PathBuf,
    common_dir: PathBuf,
}

impl LiveGitHistory {
    /// Binds to the repository containing `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RepositoryNotFound`] if `root` is not inside a git
    /// working copy, or [`Error::GitUnavailable`] if git cannot be run.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let output = Command::new("git")
            .arg("-C")
            .arg(&root)
            .args(["rev-parse", "--git-common-dir"])
            .output()
            .map_err(Error::GitUnavailable)?;
        if !output.status.success() {
            let reason = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::RepositoryNotFound { path: root, reason });
        }
        // Linked worktrees share the common dir, which holds the shallow marker.
        // Relative answers are relative to `root`; `join` keeps absolute ones as-is.
        let common_dir = root.join(String::from_utf8_lossy(&output.stdout).trim());
        Ok(Self { root, common_dir })
    }

    /// The root this adapter was opened with.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()
            .map_err(Error::GitUnavailable)?;
        if !output.status.success() {
            return Err(Error::GitFailed {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl HistorySource for LiveGitHistory {
    fn is_shallow(&self) -> bool {
        self.common_dir.join(SHALLOW_MARKER).exists()
    }

    fn references(&self) -> Result<Vec<String>> {
        let stdout = self.git(&["for-each-ref", "--format=%(objectname)"])?;
        Ok(stdout.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect())
    }

    fn first_parent_count(&self, reference: &str) -> Result<u64> {
        let args = ["rev-list", "--count", "--first-parent", reference];
        let stdout = self.git(&args)?;
        stdout.trim().parse().map_err(|_| Error::MalformedOutput {
            command: args.join(" "),
            output: stdout.clone(),
        })
    }

    fn last_commit_timestamp(&self, path: &Path) -> Result<Option<i64>> {
        let path = path.to_string_lossy();
        // File names such as `docs/[a].md` must not be read as glob patterns.
        let args = ["--literal-pathspecs", "log", "-n", "1", "--format=%at", "--", &*path];
        let stdout = self.git(&args)?;
        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse().map(Some).map_err(|_| Error::MalformedOutput {
            command: args.join(" "),
            output: stdout.clone(),
        })
    }
}

//! Last-modified lookups against a repository, with a one-time shallow-clone check.

use std::path::{Path, PathBuf};

use crate::ci::ShallowCloneAdvisory;
use crate::context::ServiceContext;
use crate::dates::{format_dates, FormattedDateSet};
use crate::error::Result;
use crate::ports::history::HistorySource;

/// Outcome of the shallow-clone check run at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShallowCloneCheck {
    /// The shallow marker was present.
    pub shallow: bool,
    /// Largest first-parent commit count over all references. `None` when the
    /// clone is complete or counting failed.
    pub n_commits: Option<u64>,
    /// The advisory that was emitted, if any.
    pub advisory: Option<ShallowCloneAdvisory>,
}

/// Read-only view of one repository's history.
///
/// Build one per documentation build and reuse it across files.
pub struct RepositoryInspector {
    ctx: ServiceContext,
    shallow_check: ShallowCloneCheck,
}

impl RepositoryInspector {
    /// Binds to the git repository containing `root` using live adapters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RepositoryNotFound`](crate::Error::RepositoryNotFound)
    /// if `root` is not inside a git working copy.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(ServiceContext::live(root)?))
    }

    /// Wraps a context and runs the shallow-clone check once.
    ///
    /// The check only ever warns through the context's diagnostic sink.
    #[must_use]
    pub fn new(ctx: ServiceContext) -> Self {
        let shallow_check = check_shallow_clone(&ctx);
        Self { ctx, shallow_check }
    }

    /// What the construction-time shallow-clone check found.
    #[must_use]
    pub fn shallow_clone_check(&self) -> ShallowCloneCheck {
        self.shallow_check
    }

    /// Unix timestamp of the most recent commit touching `path`.
    ///
    /// Returns `Ok(None)` when the path has no history; the caller decides the
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns an error for infrastructure failures only.
    pub fn last_modified(&self, path: &Path) -> Result<Option<i64>> {
        self.ctx.history.last_commit_timestamp(path)
    }

    /// Localized revision dates for `path`.
    ///
    /// Files without history are dated with the current time and reported to
    /// the diagnostic sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the history query fails or the date cannot be formatted.
    pub fn revision_date(&self, path: &Path, locale: &str) -> Result<FormattedDateSet> {
        let timestamp = if let Some(timestamp) = self.last_modified(path)? {
            timestamp
        } else {
            self.ctx
                .diagnostics
                .warn(&format!("{} has no git logs, using current timestamp", path.display()));
            self.ctx.clock.now().timestamp()
        };
        format_dates(timestamp, locale)
    }
}

fn check_shallow_clone(ctx: &ServiceContext) -> ShallowCloneCheck {
    if !ctx.history.is_shallow() {
        return ShallowCloneCheck::default();
    }

    let n_commits = match commit_count(&*ctx.history) {
        Ok(n) => n,
        Err(e) => {
            tracing::debug!("skipping shallow clone advisory, commit count failed: {e}");
            return ShallowCloneCheck { shallow: true, ..ShallowCloneCheck::default() };
        }
    };
    tracing::debug!(n_commits, "repository is a shallow clone");

    let advisory = ctx.ci.shallow_clone_advisory(n_commits);
    if let Some(advisory) = advisory {
        ctx.diagnostics.warn(advisory.message());
    }
    ShallowCloneCheck { shallow: true, n_commits: Some(n_commits), advisory }
}

/// Largest first-parent commit count over every reference; 0 without references.
///
/// # Errors
///
/// Returns the first error raised while listing or walking references.
pub fn commit_count(history: &dyn HistorySource) -> Result<u64> {
    let mut max = 0;
    for reference in history.references()? {
        max = max.max(history.first_parent_count(&reference)?);
    }
    Ok(max)
}

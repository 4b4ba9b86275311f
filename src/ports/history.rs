//! History port for read-only version-control queries.

use std::path::Path;

use crate::error::Result;

/// Read-only access to the commit history of one repository.
///
/// The implementor owns the binding to the repository root. Abstracting
/// history access lets the inspector run against a cassette instead of a
/// real `git` executable.
pub trait HistorySource: Send + Sync {
    /// Returns true when the repository carries a shallow-clone marker.
    fn is_shallow(&self) -> bool;

    /// Lists the object names of every reference in the repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the references cannot be enumerated.
    fn references(&self) -> Result<Vec<String>>;

    /// Counts the commits reachable from `reference` following first parents only.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference cannot be walked.
    fn first_parent_count(&self, reference: &str) -> Result<u64>;

    /// Returns the Unix timestamp of the most recent commit touching `path`.
    ///
    /// `Ok(None)` means the path has no history (new or untracked file).
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure failures.
    fn last_commit_timestamp(&self, path: &Path) -> Result<Option<i64>>;
}

//! Error types shared by the inspector, the formatter and the ports.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur while querying history or formatting dates.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured root is not inside a git working copy.
    #[error("'{}' is not inside a git repository: {reason}", .path.display())]
    RepositoryNotFound {
        /// The root that was requested.
        path: PathBuf,
        /// What git reported.
        reason: String,
    },

    /// The `git` executable could not be spawned.
    #[error("failed to run git: {0}")]
    GitUnavailable(#[source] std::io::Error),

    /// A git command exited with a non-zero status.
    #[error("`git {command}` failed: {stderr}")]
    GitFailed {
        /// The arguments passed to git.
        command: String,
        /// Trimmed standard error of the process.
        stderr: String,
    },

    /// A git command succeeded but printed something unexpected.
    #[error("unexpected output from `git {command}`: {output:?}")]
    MalformedOutput {
        /// The arguments passed to git.
        command: String,
        /// The offending output.
        output: String,
    },

    /// The timestamp cannot be represented as a calendar date.
    #[error("timestamp {0} is outside the supported date range")]
    TimestampOutOfRange(i64),

    /// The timestamp is not a finite number.
    #[error("timestamp {0} is not a finite number")]
    InvalidTimestamp(f64),

    /// A cassette file could not be read, parsed or written.
    #[error("cassette error: {0}")]
    Cassette(String),

    /// An error that was captured in a cassette and replayed.
    #[error("{0}")]
    Replayed(String),

    /// Filesystem access failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias using the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_not_found_names_the_path() {
        let err = Error::RepositoryNotFound {
            path: PathBuf::from("/tmp/nowhere"),
            reason: "fatal: not a git repository".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/nowhere"));
        assert!(msg.contains("not a git repository"));
    }

    #[test]
    fn git_failed_includes_command() {
        let err = Error::GitFailed { command: "log -n 1".into(), stderr: "boom".into() };
        assert_eq!(err.to_string(), "`git log -n 1` failed: boom");
    }
}

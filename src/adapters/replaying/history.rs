//! Replaying adapter for the `HistorySource` port.

use std::path::Path;
use std::sync::Mutex;

use super::{decode, next_output, next_output_for, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::Result;
use crate::ports::history::HistorySource;

/// Serves history queries from a cassette instead of a repository.
pub struct ReplayingHistorySource {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingHistorySource {
    /// Creates a new replaying source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl HistorySource for ReplayingHistorySource {
    fn is_shallow(&self) -> bool {
        // A cassette without shallow-clone data describes a full clone.
        next_output(&self.replayer, "history", "is_shallow")
            .and_then(|output| decode(output, "history::is_shallow"))
            .unwrap_or(false)
    }

    fn references(&self) -> Result<Vec<String>> {
        let output = next_output(&self.replayer, "history", "references")?;
        replay_result(output, "history::references")
    }

    fn first_parent_count(&self, reference: &str) -> Result<u64> {
        let output = next_output_for(
            &self.replayer,
            "history",
            "first_parent_count",
            "reference",
            reference,
        )?;
        replay_result(output, "history::first_parent_count")
    }

    fn last_commit_timestamp(&self, path: &Path) -> Result<Option<i64>> {
        let path = path.to_string_lossy();
        let output =
            next_output_for(&self.replayer, "history", "last_commit_timestamp", "path", &path)?;
        replay_result(output, "history::last_commit_timestamp")
    }
}

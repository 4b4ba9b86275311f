//! Recording adapter for the `HistorySource` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::{record_interaction, record_result};
use crate::cassette::recorder::CassetteRecorder;
use crate::error::Result;
use crate::ports::HistorySource;

/// Records history queries while delegating to an inner source.
pub struct RecordingHistorySource {
    inner: Box<dyn HistorySource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingHistorySource {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn HistorySource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PathInput<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct ReferenceInput<'a> {
    reference: &'a str,
}

impl HistorySource for RecordingHistorySource {
    fn is_shallow(&self) -> bool {
        let shallow = self.inner.is_shallow();
        record_interaction(&self.recorder, "history", "is_shallow", &(), &shallow);
        shallow
    }

    fn references(&self) -> Result<Vec<String>> {
        let result = self.inner.references();
        record_result(&self.recorder, "history", "references", &(), &result);
        result
    }

    fn first_parent_count(&self, reference: &str) -> Result<u64> {
        let result = self.inner.first_parent_count(reference);
        let input = ReferenceInput { reference };
        record_result(&self.recorder, "history", "first_parent_count", &input, &result);
        result
    }

    fn last_commit_timestamp(&self, path: &Path) -> Result<Option<i64>> {
        let result = self.inner.last_commit_timestamp(path);
        let input = PathInput { path: &path.to_string_lossy() };
        record_result(&self.recorder, "history", "last_commit_timestamp", &input, &result);
        result
    }
}

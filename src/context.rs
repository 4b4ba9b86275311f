//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::diagnostics::TracingSink;
use crate::adapters::live::git::LiveGitHistory;
use crate::adapters::recording::{RecordingClock, RecordingHistorySource};
use crate::adapters::replaying::{ReplayingClock, ReplayingHistorySource};
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ci::CiEnvironment;
use crate::error::Result;
use crate::ports::clock::Clock;
use crate::ports::diagnostics::DiagnosticSink;
use crate::ports::history::HistorySource;

/// Bundles the ports a [`RepositoryInspector`](crate::inspector::RepositoryInspector)
/// talks to.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying).
pub struct ServiceContext {
    /// Commit history of the bound repository.
    pub history: Box<dyn HistorySource>,
    /// Clock for the "no history" fallback.
    pub clock: Box<dyn Clock>,
    /// Sink for operator advisories.
    pub diagnostics: Box<dyn DiagnosticSink>,
    /// CI systems detected for the shallow-clone check.
    pub ci: CiEnvironment,
    /// Recorder shared with recording adapters; saved on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a context from explicit parts.
    #[must_use]
    pub fn new(
        history: Box<dyn HistorySource>,
        clock: Box<dyn Clock>,
        diagnostics: Box<dyn DiagnosticSink>,
        ci: CiEnvironment,
    ) -> Self {
        Self { history, clock, diagnostics, ci, recorder: None }
    }

    /// Creates a live context bound to the git repository containing `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RepositoryNotFound`](crate::Error::RepositoryNotFound)
    /// if `root` is not inside a git working copy.
    pub fn live(root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(
            Box::new(LiveGitHistory::open(root)?),
            Box::new(LiveClock),
            Box::new(TracingSink),
            CiEnvironment::from_env(),
        ))
    }

    /// Creates a live context that records history and clock interactions.
    ///
    /// The cassette is written to `cassette` when this context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not inside a git working copy.
    pub fn recording(root: impl Into<PathBuf>, cassette: &Path) -> Result<Self> {
        let history = LiveGitHistory::open(root)?;
        let name = cassette
            .file_stem()
            .map_or_else(|| "revdate".to_string(), |s| s.to_string_lossy().into_owned());
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            cassette,
            name,
            history.root().display().to_string(),
        )));

        Ok(Self {
            history: Box::new(RecordingHistorySource::new(Box::new(history), Arc::clone(&recorder))),
            clock: Box::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&recorder))),
            diagnostics: Box::new(TracingSink),
            ci: CiEnvironment::from_env(),
            recorder: Some(recorder),
        })
    }

    /// Creates a context that serves history and clock from a cassette file.
    ///
    /// Each port gets its own replayer so per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(cassette: &Path) -> Result<Self> {
        let cassette = Cassette::load(cassette)?;
        Ok(Self::new(
            Box::new(ReplayingHistorySource::new(CassetteReplayer::new(&cassette))),
            Box::new(ReplayingClock::new(CassetteReplayer::new(&cassette))),
            Box::new(TracingSink),
            CiEnvironment::from_env(),
        ))
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        if let Some(recorder) = self.recorder.take() {
            let saved = recorder.lock().map_err(|e| e.to_string()).and_then(|guard| {
                guard.save().map(|path| path.to_path_buf()).map_err(|e| e.to_string())
            });
            match saved {
                Ok(path) => tracing::info!(path = %path.display(), "cassette written"),
                Err(e) => tracing::warn!("failed to write cassette: {e}"),
            }
        }
    }
}

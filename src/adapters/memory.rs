//! In-memory diagnostic sink.

use std::sync::Mutex;

use crate::ports::diagnostics::DiagnosticSink;

/// Collects warnings in memory so callers can inspect or re-emit them.
#[derive(Debug, Default)]
pub struct MemorySink {
    warnings: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every warning received so far.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().expect("sink lock poisoned").clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        self.warnings.lock().expect("sink lock poisoned").push(message.to_string());
    }
}

//! Diagnostic sink port for operator-facing advisories.

/// Receives human-readable warnings that are not returned as data.
///
/// Injecting the sink lets callers capture advisories without depending on
/// the global `tracing` subscriber.
pub trait DiagnosticSink: Send + Sync {
    /// Emits a warning line.
    fn warn(&self, message: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<T> {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

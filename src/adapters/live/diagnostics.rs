//! Live diagnostic sink forwarding to `tracing`.

use crate::ports::diagnostics::DiagnosticSink;

/// Emits every advisory as a `tracing` warning event.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the core and an external system
//! (time, version-control history, operator diagnostics). Implementations
//! live in `src/adapters/`.

pub mod clock;
pub mod diagnostics;
pub mod history;

pub use clock::Clock;
pub use diagnostics::DiagnosticSink;
pub use history::HistorySource;

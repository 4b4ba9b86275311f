//! Cassettes: recorded port interactions that can be served back in place
//! of a live repository.

pub mod format;
pub mod recorder;
pub mod replayer;

//! Port implementations: live, recording, replaying and in-memory.

pub mod live;
pub mod memory;
pub mod recording;
pub mod replaying;

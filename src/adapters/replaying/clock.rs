//! Replaying adapter for the Clock port.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::{decode, next_output};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::clock::Clock;

/// Replays recorded clock values from a cassette.
pub struct ReplayingClock {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingClock {
    /// Creates a new replaying clock from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Clock for ReplayingClock {
    /// # Panics
    ///
    /// Panics when the cassette holds no (more) clock readings; the port has
    /// no error channel and replay is only used for deterministic runs.
    fn now(&self) -> DateTime<Utc> {
        match next_output(&self.replayer, "clock", "now")
            .and_then(|output| decode(output, "clock::now"))
        {
            Ok(now) => now,
            Err(e) => panic!("{e}"),
        }
    }
}

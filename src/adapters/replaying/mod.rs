//! Replaying adapters that serve recorded interactions.

pub mod clock;
pub mod history;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::{Error, Result};

pub use clock::ReplayingClock;
pub use history::ReplayingHistorySource;

/// Pull the next recorded output for `port::method`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value> {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    Ok(replayer.next_interaction(port, method)?.output.clone())
}

/// Pull the next recorded output for `port::method`, checking that it was
/// recorded for the same `key` input.
pub(crate) fn next_output_for(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
    key: &str,
    value: &str,
) -> Result<serde_json::Value> {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    let interaction = replayer.next_interaction(port, method)?;
    let recorded = interaction.input.get(key).and_then(serde_json::Value::as_str);
    if recorded != Some(value) {
        return Err(Error::Cassette(format!(
            "{port}::{method} #{} was recorded for {key} {recorded:?}, replayed with {value:?}",
            interaction.seq
        )));
    }
    Ok(interaction.output.clone())
}

/// Decode a plain recorded value.
pub(crate) fn decode<T: DeserializeOwned>(output: serde_json::Value, context: &str) -> Result<T> {
    serde_json::from_value(output)
        .map_err(|e| Error::Cassette(format!("{context}: failed to deserialize: {e}")))
}

/// Decode a value recorded with the `{"ok": v}` / `{"err": message}` convention.
///
/// Mirror of `recording::record_result`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
    context: &str,
) -> Result<T> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(Error::Replayed(msg));
    }
    let value = output.get("ok").cloned().unwrap_or(output);
    decode(value, context)
}

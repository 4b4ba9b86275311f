//! `revdate format` command.

use super::render;
use crate::cli::OutputFormat;
use crate::dates::{format_dates, truncate_seconds};

/// Execute the `format` command.
///
/// # Errors
///
/// Returns an error string if the timestamp is not finite or out of range.
pub fn run(timestamp: f64, locale: &str, output: OutputFormat) -> Result<(), String> {
    println!("{}", format_timestamp(timestamp, locale, output)?);
    Ok(())
}

fn format_timestamp(timestamp: f64, locale: &str, output: OutputFormat) -> Result<String, String> {
    let seconds = truncate_seconds(timestamp).map_err(|e| e.to_string())?;
    let dates = format_dates(seconds, locale).map_err(|e| e.to_string())?;
    render(&dates, output)
}

//! Localized last-commit dates for files in a git repository.
//!
//! [`RepositoryInspector`] looks up when a file last changed;
//! [`format_dates`] turns that timestamp into the strings a documentation
//! template substitutes.

pub mod adapters;
pub mod cassette;
pub mod ci;
pub mod cli;
pub mod commands;
pub mod context;
pub mod dates;
pub mod error;
pub mod inspector;
pub mod ports;

use clap::Parser;

pub use dates::{format_dates, FormattedDateSet};
pub use error::{Error, Result};
pub use inspector::RepositoryInspector;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}

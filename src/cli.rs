//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `revdate`.
#[derive(Debug, Parser)]
#[command(name = "revdate", version, about = "Localized last-commit dates for documentation files")]
pub struct Cli {
    /// Repository root (defaults to `REVDATE_REPO`, then the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the revision dates of files, relative to the repository root.
    Date {
        /// Locale code (defaults to `REVDATE_LOCALE`, then `en`).
        #[arg(long)]
        locale: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
        /// Files to date.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Format a Unix timestamp without touching a repository.
    Format {
        /// Locale code (defaults to `REVDATE_LOCALE`, then `en`).
        #[arg(long)]
        locale: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
        /// Seconds since the epoch; fractions are truncated.
        #[arg(allow_negative_numbers = true)]
        timestamp: f64,
    },
    /// Report whether the clone is shallow and emit CI fetch-depth advisories.
    Check,
}

/// Serialization used for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

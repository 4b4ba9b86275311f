//! Command dispatch and handlers.

pub mod check;
pub mod date;
pub mod format;

use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::{Cli, Command, OutputFormat};
use crate::context::ServiceContext;
use crate::dates::DEFAULT_LOCALE;

/// Dispatch a parsed command to its handler.
///
/// When `REVDATE_REPLAY` names a cassette file, history and clock are served
/// from it. Otherwise, when `REVDATE_RECORD` names a file, live interactions
/// are recorded there.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    match &cli.command {
        Command::Date { locale, output, files } => {
            let ctx = service_context(cli.repo.as_deref())?;
            date::run(ctx, files, &resolve_locale(locale.as_deref()), *output)
        }
        Command::Format { locale, output, timestamp } => {
            format::run(*timestamp, &resolve_locale(locale.as_deref()), *output)
        }
        Command::Check => check::run(service_context(cli.repo.as_deref())?),
    }
}

fn service_context(repo: Option<&Path>) -> Result<ServiceContext, String> {
    if let Ok(cassette) = env::var("REVDATE_REPLAY") {
        return ServiceContext::replaying(Path::new(&cassette)).map_err(|e| e.to_string());
    }
    let root = repo_root(repo);
    let ctx = match env::var("REVDATE_RECORD") {
        Ok(cassette) => ServiceContext::recording(root, Path::new(&cassette)),
        Err(_) => ServiceContext::live(root),
    };
    ctx.map_err(|e| e.to_string())
}

fn repo_root(repo: Option<&Path>) -> PathBuf {
    repo.map(Path::to_path_buf)
        .or_else(|| env::var_os("REVDATE_REPO").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn resolve_locale(locale: Option<&str>) -> String {
    locale
        .map(String::from)
        .or_else(|| env::var("REVDATE_LOCALE").ok())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Serialize a command result in the requested format.
fn render<T: Serialize>(value: &T, output: OutputFormat) -> Result<String, String> {
    match output {
        OutputFormat::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
    }
}

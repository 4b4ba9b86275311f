//! `revdate date` command.

use std::path::PathBuf;

use serde::Serialize;

use super::render;
use crate::cli::OutputFormat;
use crate::context::ServiceContext;
use crate::dates::FormattedDateSet;
use crate::inspector::RepositoryInspector;

/// Revision dates of one file, as printed.
#[derive(Debug, Serialize)]
struct DatedFile {
    path: String,
    #[serde(flatten)]
    dates: FormattedDateSet,
}

/// Execute the `date` command.
///
/// Files without history are dated with the current time and a warning is
/// logged for each of them.
///
/// # Errors
///
/// Returns an error string if any history query fails.
pub fn run(
    ctx: ServiceContext,
    files: &[PathBuf],
    locale: &str,
    output: OutputFormat,
) -> Result<(), String> {
    let inspector = RepositoryInspector::new(ctx);
    println!("{}", date_files(&inspector, files, locale, output)?);
    Ok(())
}

fn date_files(
    inspector: &RepositoryInspector,
    files: &[PathBuf],
    locale: &str,
    output: OutputFormat,
) -> Result<String, String> {
    let mut dated = Vec::with_capacity(files.len());
    for file in files {
        let dates = inspector
            .revision_date(file, locale)
            .map_err(|e| format!("{}: {e}", file.display()))?;
        dated.push(DatedFile { path: file.display().to_string(), dates });
    }
    render(&dated, output)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::adapters::memory::MemorySink;
    use crate::ci::CiEnvironment;
    use crate::error::Result;
    use crate::ports::{Clock, HistorySource};

    struct OneFile;

    impl HistorySource for OneFile {
        fn is_shallow(&self) -> bool {
            false
        }
        fn references(&self) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
        fn first_parent_count(&self, _reference: &str) -> Result<u64> {
            Ok(0)
        }
        fn last_commit_timestamp(&self, path: &Path) -> Result<Option<i64>> {
            Ok((path == Path::new("index.md")).then_some(1_704_067_200))
        }
    }

    struct Epoch;

    impl Clock for Epoch {
        fn now(&self) -> DateTime<Utc> {
            DateTime::from_timestamp(0, 0).unwrap()
        }
    }

    #[test]
    fn dates_each_file_in_order() {
        let ctx = ServiceContext::new(
            Box::new(OneFile),
            Box::new(Epoch),
            Box::new(MemorySink::new()),
            CiEnvironment::default(),
        );
        let inspector = RepositoryInspector::new(ctx);
        let files = [PathBuf::from("index.md"), PathBuf::from("draft.md")];

        let json = date_files(&inspector, &files, "en", OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["path"], "index.md");
        assert_eq!(parsed[0]["date"], "January 1, 2024");
        assert_eq!(parsed[1]["path"], "draft.md");
        assert_eq!(parsed[1]["iso_datetime"], "1970-01-01 00:00:00");
    }
}

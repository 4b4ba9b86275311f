//! Localized revision-date strings.

pub mod locale;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Error, Result};

pub use locale::DateLocale;

/// Locale used when the caller does not ask for one.
pub const DEFAULT_LOCALE: &str = "en";

/// Every string representation of one revision date.
///
/// All five fields are always present and derive from one
/// `(timestamp, locale)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedDateSet {
    /// Long localized date, e.g. `January 1, 2024`.
    pub date: String,
    /// `date` followed by the 24-hour `HH:MM:SS` time.
    pub datetime: String,
    /// `YYYY-MM-DD`.
    pub iso_date: String,
    /// `YYYY-MM-DD HH:MM:SS`.
    pub iso_datetime: String,
    /// Placeholder markup for a client-side "time ago" widget.
    pub timeago: String,
}

impl FormattedDateSet {
    /// Template variable names in output order.
    pub const KEYS: [&'static str; 5] = ["date", "datetime", "iso_date", "iso_datetime", "timeago"];

    /// Looks up a field by its template variable name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "date" => Some(&self.date),
            "datetime" => Some(&self.datetime),
            "iso_date" => Some(&self.iso_date),
            "iso_datetime" => Some(&self.iso_datetime),
            "timeago" => Some(&self.timeago),
            _ => None,
        }
    }

    /// Iterates `(name, value)` pairs for template substitution.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Self::KEYS.into_iter().filter_map(|key| self.get(key).map(|value| (key, value)))
    }
}

/// Formats a Unix timestamp (seconds, interpreted as UTC) for `locale`.
///
/// Unrecognized locales fall back to English.
///
/// # Errors
///
/// Returns [`Error::TimestampOutOfRange`] if the timestamp has no calendar date.
pub fn format_dates(timestamp: i64, locale: &str) -> Result<FormattedDateSet> {
    let revision: DateTime<Utc> =
        DateTime::from_timestamp(timestamp, 0).ok_or(Error::TimestampOutOfRange(timestamp))?;
    let resolved = DateLocale::resolve(locale);

    let date = revision.format_localized(resolved.long_pattern(), resolved.locale()).to_string();
    let time = revision.format("%H:%M:%S").to_string();
    let iso_date = revision.format("%Y-%m-%d").to_string();

    Ok(FormattedDateSet {
        datetime: format!("{date} {time}"),
        iso_datetime: format!("{iso_date} {time}"),
        timeago: format!(
            "<span class='timeago' datetime='{}' locale='{}'></span>",
            timestamp * 1000,
            escape_attribute(locale)
        ),
        date,
        iso_date,
    })
}

/// Drops the fractional part of a timestamp, rounding toward zero.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] for `NaN` and infinities.
#[allow(clippy::cast_possible_truncation)]
pub fn truncate_seconds(timestamp: f64) -> Result<i64> {
    if !timestamp.is_finite() {
        return Err(Error::InvalidTimestamp(timestamp));
    }
    Ok(timestamp.trunc() as i64)
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

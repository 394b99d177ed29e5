//! Instant parsing and calendar arithmetic.
//!
//! Instants are local naive date-times; no time-zone conversion happens
//! anywhere in the crate.

use crate::utils::error::{Result, TrackerError};
use chrono::{Months, NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Deserializer};
use std::fmt::Write;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses `YYYY-MM-DD` (midnight) or `YYYY-MM-DDTHH:MM[:SS]`.
pub fn parse_instant(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
        .map_err(|e| TrackerError::DateParseError {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Renders `instant` with a strftime pattern.
///
/// Fails instead of panicking on patterns a naive instant cannot satisfy,
/// such as the `%z`/`%Z` offset specifiers or unknown `%` escapes.
pub fn format_instant(instant: NaiveDateTime, format: &str) -> Result<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", instant.format(format)).map_err(|_| {
        TrackerError::InvalidConfigValueError {
            field: "date_format".to_string(),
            value: format.to_string(),
            reason: "Pattern cannot be rendered for a local date-time".to_string(),
        }
    })?;
    Ok(rendered)
}

/// One registration term after `start`.
///
/// Feb 29 rolls back to Feb 28. Saturates at the end of chrono's range.
pub fn one_year_after(start: NaiveDateTime) -> NaiveDateTime {
    start
        .checked_add_months(Months::new(12))
        .unwrap_or(NaiveDateTime::MAX)
}

/// `instant` shifted by a signed number of days, saturating at the range ends.
pub fn shift_days(instant: NaiveDateTime, days: i64) -> NaiveDateTime {
    TimeDelta::try_days(days)
        .and_then(|delta| instant.checked_add_signed(delta))
        .unwrap_or(if days < 0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
}

/// Serde helper for fields holding an instant as text.
pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw).map_err(|e| Error::custom(e.to_string()))
}

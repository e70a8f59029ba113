//! Timezone picker helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Settings and maintenance forms offer a timezone dropdown labelled with each
//! zone's current UTC offset. Offsets depend on DST, so nothing here is cached;
//! every call reads the timezone database at the given instant.
//!
//! ERROR HANDLING
//! ==============
//! Zones the database does not know are skipped from the list rather than
//! failing it; single lookups report them as [`TimezoneError::UnknownZone`].

#[cfg(test)]
#[path = "timezone_test.rs"]
mod timezone_test;

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;
use serde::Serialize;

pub use super::timezone_data::KNOWN_TIMEZONES;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimezoneError {
    /// The identifier is not in the timezone database.
    #[error("unknown timezone: {0}")]
    UnknownZone(String),
}

/// One dropdown entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimezoneEntry {
    /// Display label, e.g. `(UTC+05:30) Asia/Kolkata`.
    pub name: String,
    /// IANA identifier.
    pub value: String,
    /// Signed UTC offset in hours.
    pub time: f64,
}

fn parse_zone(code: &str) -> Result<Tz, TimezoneError> {
    code.parse::<Tz>().map_err(|_| TimezoneError::UnknownZone(code.to_owned()))
}

/// UTC offset of `code` in hours at `now`; fractional for half/quarter-hour zones.
///
/// # Errors
///
/// Returns [`TimezoneError::UnknownZone`] for identifiers outside the database.
pub fn timezone_offset_at(code: &str, now: DateTime<Utc>) -> Result<f64, TimezoneError> {
    let tz = parse_zone(code)?;
    Ok(offset_hours(&now.with_timezone(&tz)))
}

/// UTC offset of `code` in hours right now.
///
/// # Errors
///
/// Returns [`TimezoneError::UnknownZone`] for identifiers outside the database.
pub fn timezone_offset(code: &str) -> Result<f64, TimezoneError> {
    timezone_offset_at(code, Utc::now())
}

/// Offset of `code` at `now` formatted as `±HH:mm`.
///
/// # Errors
///
/// Returns [`TimezoneError::UnknownZone`] for identifiers outside the database.
pub fn format_offset_at(code: &str, now: DateTime<Utc>) -> Result<String, TimezoneError> {
    let tz = parse_zone(code)?;
    Ok(now.with_timezone(&tz).format("%:z").to_string())
}

fn offset_hours(local: &DateTime<Tz>) -> f64 {
    f64::from(local.offset().fix().local_minus_utc()) / 3600.0
}

fn entry_at(code: &str, now: DateTime<Utc>) -> Result<TimezoneEntry, TimezoneError> {
    let local = now.with_timezone(&parse_zone(code)?);
    let display = local.format("%:z");
    Ok(TimezoneEntry { name: format!("(UTC{display}) {code}"), value: code.to_owned(), time: offset_hours(&local) })
}

/// Entries for `codes` at `now`, sorted by offset.
///
/// Unknown identifiers are dropped. Zones sharing an offset keep their order
/// from `codes`.
pub fn timezone_list_at(codes: &[&str], now: DateTime<Utc>) -> Vec<TimezoneEntry> {
    let mut result: Vec<TimezoneEntry> = codes
        .iter()
        .filter_map(|code| match entry_at(code, now) {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::debug!("skipping timezone: {err}");
                None
            }
        })
        .collect();
    result.sort_by(|a, b| a.time.total_cmp(&b.time));
    result
}

/// Dropdown entries for every known timezone, sorted by current offset.
pub fn timezone_list() -> Vec<TimezoneEntry> {
    timezone_list_at(KNOWN_TIMEZONES, Utc::now())
}

//! Time helpers for log timestamps and chart day origins.
//!
//! Log lines only carry a time of day (`HH:MM:SS`). Chart points need an
//! absolute timestamp, so callers pick a day origin (local midnight of some
//! day) and offset each sample from it.
//!
//! Supported day origin expressions:
//! - `today` / `yesterday`: local midnight of that day
//! - Date: `2026-02-07` (local midnight)
//! - Epoch milliseconds: `1770422400000`

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use super::number::parse_leading_uint;

/// Error type for day origin parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeParseError {
    pub input: String,
    pub message: String,
}

impl std::fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse time '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for TimeParseError {}

/// Converts an `HH:MM:SS` token into seconds since midnight.
///
/// Each part goes through the lenient integer parse, so `10:11:03,` is
/// accepted. Parts are not range checked: `25:61:00` yields 93660.
/// Returns `None` unless there are exactly three parts, each with leading
/// digits, and the total fits in `u32`.
pub fn parse_time_of_day(token: &str) -> Option<u32> {
    let mut parts = token.split(':');
    let (h, m, s) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let hours = parse_leading_uint(h)?;
    let minutes = parse_leading_uint(m)?;
    let seconds = parse_leading_uint(s)?;

    let total = hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?;
    u32::try_from(total).ok()
}

/// Epoch milliseconds of midnight on `date` in `tz`.
///
/// When midnight is ambiguous the earliest instant wins. Returns `None` if
/// midnight does not exist on that date (DST gap at 00:00).
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<i64> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.timestamp_millis())
}

/// Epoch milliseconds of the start of the current local day.
pub fn start_of_local_day() -> Result<i64, TimeParseError> {
    let today = Local::now().date_naive();
    start_of_day(&Local, today).ok_or_else(|| TimeParseError {
        input: today.to_string(),
        message: "local midnight does not exist on this date".to_string(),
    })
}

/// Parses a day origin expression in the local time zone.
///
/// # Examples
///
/// ```
/// use memplot::util::parse_day_origin;
///
/// assert_eq!(parse_day_origin("1770422400000").unwrap(), 1770422400000);
/// assert!(parse_day_origin("today").is_ok());
/// ```
pub fn parse_day_origin(input: &str) -> Result<i64, TimeParseError> {
    parse_day_origin_in(input, &Local, Local::now().date_naive())
}

/// Parses a day origin expression in `tz`, with `today` as the reference date.
pub fn parse_day_origin_in<Tz: TimeZone>(
    input: &str,
    tz: &Tz,
    today: NaiveDate,
) -> Result<i64, TimeParseError> {
    let input = input.trim();
    let err = |message: &str| TimeParseError {
        input: input.to_string(),
        message: message.to_string(),
    };

    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        return input
            .parse::<i64>()
            .ok()
            .filter(|ms| DateTime::<Utc>::from_timestamp_millis(*ms).is_some())
            .ok_or_else(|| err("epoch milliseconds out of range"));
    }

    let date = match input.to_ascii_lowercase().as_str() {
        "today" => today,
        "yesterday" => today.pred_opt().ok_or_else(|| err("date out of range"))?,
        _ => NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
            err("Unrecognized format. Use: today, yesterday, \
                 date (2026-02-07), or epoch milliseconds (1770422400000)")
        })?,
    };

    start_of_day(tz, date).ok_or_else(|| err("midnight does not exist on this date"))
}

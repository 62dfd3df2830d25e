//! Date formatting shared by the wired and structured resolvers.
//!
//! System names only ever embed dates as `YYYY-MM-DD`.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Format an epoch-millisecond timestamp as `YYYY-MM-DD` (UTC).
///
/// Returns `None` when the timestamp falls outside the representable range.
pub fn format_epoch_millis(millis: i64) -> Option<String> {
    let timestamp = OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()?;
    timestamp.date().format(DATE_FORMAT).ok()
}

/// Reformat a positional `MM-DD-YYYY` calendar value as `YYYY-MM-DD`.
///
/// Anything other than exactly three numeric, hyphen-separated parts that
/// form a real calendar date yields `None`.
pub fn reformat_calendar(raw: &str) -> Option<String> {
    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let month: u8 = parts[0].trim().parse().ok()?;
    let day: u8 = parts[1].trim().parse().ok()?;
    let year: i32 = parts[2].trim().parse().ok()?;

    let date = Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()?;
    date.format(DATE_FORMAT).ok()
}

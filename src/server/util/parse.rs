use std::num::ParseIntError;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};

/// Parses a comma separated list of ids such as `"1,2,3"`.
///
/// Whitespace around tokens is ignored. Any token that is not an integer fails the whole
/// list.
///
/// # Returns
/// - `Ok(Vec<i32>)` - Every token parsed
/// - `Err(ParseIntError)` - At least one token is not an integer (including empty tokens)
pub fn parse_id_list(value: &str) -> Result<Vec<i32>, ParseIntError> {
    value.split(',').map(|token| token.trim().parse::<i32>()).collect()
}

/// Case-folded form of a name or search fragment.
///
/// Stored in `name_search` columns and applied to filter fragments, so matching is
/// case-insensitive for any script, not just ASCII.
pub fn search_key(value: &str) -> String {
    value.to_lowercase()
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
}

/// Half-open UTC window `[start, end)` covering one calendar day at the given offset.
///
/// # Returns
/// - `Some((start, end))` - Midnight of `date` and of the following day, converted to UTC
/// - `None` - The date is at the edge of the representable range
pub fn day_window(date: NaiveDate, offset: FixedOffset) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    let start = offset
        .from_local_datetime(&midnight)
        .single()?
        .with_timezone(&Utc);
    let end = start.checked_add_signed(Duration::days(1))?;

    Some((start, end))
}

//! Calendar-date helpers for API timestamps.
//!
//! The API sends `2025-06-20T15:28:57` for accounts and
//! `2025-06-22T02:00:00.000+00:00` for sessions. Only the leading
//! `YYYY-MM-DD` is ever shown, so both forms go through the same prefix parse.

use time::Date;
use time::macros::format_description;

/// Parse the calendar date at the start of an API timestamp.
pub fn parse_calendar_date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    let day = trimmed.split_once('T').map_or(trimmed, |(day, _)| day);
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

/// `June 20, 2025`.
pub fn format_long(date: Date) -> String {
    format!("{} {}, {}", date.month(), date.day(), date.year())
}

/// Long form of an API timestamp, `None` when it does not start with a date.
pub fn long_date(raw: &str) -> Option<String> {
    parse_calendar_date(raw).map(format_long)
}

/// `YYYY-MM-DD` for a date input; unparseable values pass through unchanged.
pub fn date_input_value(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day()),
        None => raw.to_owned(),
    }
}

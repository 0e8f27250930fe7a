//! Conversions between API timestamps and the viewer's local time.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Format accepted by `<input type="datetime-local">`.
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Interpret a local wall-clock time, taking the earlier instant when a DST
/// change makes it ambiguous.
pub fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&naive),
    }
}

pub fn to_input_value(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format(INPUT_FORMAT).to_string()
}

pub fn from_input_value(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, INPUT_FORMAT)
        .ok()
        .map(local_to_utc)
}

/// e.g. "Mar 4, 2024 9:15 AM".
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%b %-d, %Y %-I:%M %p")
        .to_string()
}

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

/// Sentinel returned for timestamps outside chrono's representable range
/// (roughly ±262,000 years). Mirrors the "Invalid Date" a browser would show.
pub const INVALID_TIMESTAMP: &str = "invalid date";

/// Format a UNIX timestamp (whole seconds, may be negative or far-future)
/// as `M/D/YYYY, H:MM AM|PM`, pinned to UTC.
///
/// The shape is hard-coded rather than locale-derived so the output is
/// identical on every host: month/day/hour unpadded, minute always two
/// digits, 12-hour clock with `AM`/`PM`.
pub fn format_timestamp(secs: i64) -> String {
    format_timestamp_in(secs, &Utc)
}

/// Same as [`format_timestamp`] but renders in an explicit time zone.
///
/// The instant is still interpreted as seconds since the UNIX epoch; only
/// the calendar projection changes.
pub fn format_timestamp_in<Tz: TimeZone>(secs: i64, tz: &Tz) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(utc) => render(&utc.with_timezone(tz)),
        None => INVALID_TIMESTAMP.to_string(),
    }
}

fn render<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    let (is_pm, hour) = dt.hour12();
    let marker = if is_pm { "PM" } else { "AM" };
    format!(
        "{}/{}/{}, {}:{:02} {}",
        dt.month(),
        dt.day(),
        dt.year(),
        hour,
        dt.minute(),
        marker,
    )
}

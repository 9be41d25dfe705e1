//! Time related utils.

use chrono::SecondsFormat;

/// The timestamp type used across this crate.
///
/// The UTC offset is kept as-is instead of normalizing to UTC: the offset
/// is part of the formatted `Date` header and of the signed string, so it
/// must survive untouched from clock to wire.
pub type DateTime = chrono::DateTime<chrono::FixedOffset>;

/// Take the current time with the local UTC offset.
pub fn now() -> DateTime {
    chrono::Local::now().fixed_offset()
}

/// Format a timestamp into an RFC 3339 string like
/// `2019-02-23T10:03:00+02:00`.
///
/// Sub-second precision is never emitted; the server signs against
/// whole-second timestamps.
pub fn format_rfc3339(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, false)
}

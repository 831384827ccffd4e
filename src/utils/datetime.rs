use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;

/// Resolves an IANA identifier such as `Asia/Tokyo` against the bundled tz database.
pub fn resolve_timezone(identifier: &str) -> Option<Tz> {
    identifier.parse().ok()
}

/// The current instant, viewed in `tz`.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// RFC 3339 with whole seconds. UTC renders as `Z`, everything else as `±HH:MM`.
pub fn format_rfc3339(dt: &DateTime<Tz>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

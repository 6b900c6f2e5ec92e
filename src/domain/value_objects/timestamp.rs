//! Creation timestamps
//!
//! Timestamps are kept at microsecond precision so that both storage
//! backends round-trip them exactly.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, SubsecRound, TimeDelta, TimeZone, Utc};

/// Current time truncated to microseconds.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A fresh timestamp that is strictly later than `previous`.
pub fn fresh_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let current = now();
    if current > previous {
        current
    } else {
        previous.trunc_subsecs(6) + TimeDelta::microseconds(1)
    }
}

/// Canonical text form: RFC 3339, microseconds, `Z` suffix.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 as well as naive `YYYY-MM-DD[T ]HH:MM:SS[.f]` text,
/// which is interpreted as local time.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).trunc_subsecs(6));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|ts| ts.with_timezone(&Utc).trunc_subsecs(6))
}

/// Parse a stored timestamp, falling back to the Unix epoch.
pub fn parse_timestamp_or_epoch(raw: &str) -> DateTime<Utc> {
    parse_timestamp(raw).unwrap_or_default()
}

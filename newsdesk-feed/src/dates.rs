//! Publish-date parsing and display-zone conversion
//!
//! Feed sources mix RFC 2822 timestamps (most RSS) with ISO 8601 styles
//! (Atom-derived feeds). Parsing tries each known format in order and
//! normalizes the winner to UTC; a result without explicit zone
//! information is defined as UTC.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::entry::TimeParts;

/// Parse a raw publish-date string into a UTC timestamp
///
/// Tries RFC 2822, then RFC 3339 (covers both `Z`-suffixed and
/// explicit-offset ISO 8601), then a bare `%Y-%m-%dT%H:%M:%S` interpreted
/// as UTC. Returns `None` when nothing matches.
pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }

    None
}

/// Build a UTC timestamp from a pre-decomposed `(y, mo, d, h, mi, s)` tuple
pub fn from_time_parts(parts: TimeParts) -> Option<DateTime<Utc>> {
    let (year, month, day, hour, minute, second) = parts;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let naive = date.and_hms_opt(hour, minute, second)?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Parse the string form of a publish date, falling back to the
/// decomposed tuple when the string fails
pub fn resolve_published(
    raw: Option<&str>,
    parts: Option<TimeParts>,
) -> Option<DateTime<Utc>> {
    raw.and_then(parse_published)
        .or_else(|| parts.and_then(from_time_parts))
}

/// Display timezone resolved from a user-facing zone name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// Local zone of the running process
    System,
    /// Coordinated Universal Time
    Utc,
    /// A named IANA (or legacy alias) zone
    Named(Tz),
}

impl DisplayZone {
    /// Resolve a zone name; unresolvable names fall back to UTC
    pub fn resolve(name: &str) -> Self {
        match name.trim() {
            "" | "System" | "system" => DisplayZone::System,
            "UTC" | "utc" => DisplayZone::Utc,
            other => match other.parse::<Tz>() {
                Ok(tz) => DisplayZone::Named(tz),
                Err(_) => {
                    warn!("Unknown timezone {:?}, falling back to UTC", other);
                    DisplayZone::Utc
                }
            },
        }
    }

    /// Render a timestamp as `YYYY-MM-DD HH:MM <zone>`; `None` renders
    /// the empty string
    pub fn format(&self, ts: Option<DateTime<Utc>>) -> String {
        let Some(ts) = ts else {
            return String::new();
        };
        match self {
            DisplayZone::System => ts
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M %Z")
                .to_string(),
            DisplayZone::Utc => ts.format("%Y-%m-%d %H:%M UTC").to_string(),
            DisplayZone::Named(tz) => ts
                .with_timezone(tz)
                .format("%Y-%m-%d %H:%M %Z")
                .to_string(),
        }
    }
}

/// Resolve a zone name and format a timestamp in one call
pub fn format_in_zone(ts: Option<DateTime<Utc>>, zone_name: &str) -> String {
    DisplayZone::resolve(zone_name).format(ts)
}

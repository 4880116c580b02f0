//! Strict ISO-8601 duration codec for directory reliability attributes.
//!
//! The directory stores persistence and retry intervals as ISO-8601 duration
//! strings (`PT5M`, `PT1H30M`, `P1D`). Only the day/time designators are
//! supported: year and month components are calendar-dependent and never
//! appear in directory data, so they are rejected rather than approximated.

use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * 60;
const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Parse a `P[nD][T[nH][nM][nS]]` duration string.
///
/// Parsing is strict: designators must appear in order, at least one
/// component must be present, and nothing may trail the final designator.
/// Returns `None` for anything else — the caller decides how a malformed
/// value is reported.
pub fn parse_iso8601(value: &str) -> Option<Duration> {
    let rest = value.strip_prefix('P')?;
    if rest.is_empty() {
        return None;
    }

    let (date_part, time_part) = match rest.split_once('T') {
        Some((d, t)) => {
            if t.is_empty() {
                return None;
            }
            (d, Some(t))
        }
        None => (rest, None),
    };

    let mut secs: u64 = 0;
    let mut seen_component = false;

    let date_designators: &[(char, u64)] = &[('D', SECS_PER_DAY)];
    let time_designators: &[(char, u64)] = &[
        ('H', SECS_PER_HOUR),
        ('M', SECS_PER_MINUTE),
        ('S', 1),
    ];

    secs = consume_components(date_part, date_designators, secs, &mut seen_component)?;
    if let Some(time_part) = time_part {
        secs = consume_components(time_part, time_designators, secs, &mut seen_component)?;
    }

    if !seen_component {
        return None;
    }
    Some(Duration::from_secs(secs))
}

fn consume_components(
    mut part: &str,
    designators: &[(char, u64)],
    mut secs: u64,
    seen_component: &mut bool,
) -> Option<u64> {
    for &(designator, unit_secs) in designators {
        if let Some(idx) = part.find(designator) {
            let digits = &part[..idx];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let n: u64 = digits.parse().ok()?;
            secs = secs.checked_add(n.checked_mul(unit_secs)?)?;
            *seen_component = true;
            part = &part[idx + 1..];
        }
    }
    // Anything left over is an out-of-order or unknown designator.
    if !part.is_empty() {
        return None;
    }
    Some(secs)
}

/// Format a duration back to its canonical ISO-8601 string.
pub fn format_iso8601(duration: Duration) -> String {
    let mut secs = duration.as_secs();
    if secs == 0 {
        return "PT0S".to_string();
    }

    let days = secs / SECS_PER_DAY;
    secs %= SECS_PER_DAY;
    let hours = secs / SECS_PER_HOUR;
    secs %= SECS_PER_HOUR;
    let minutes = secs / SECS_PER_MINUTE;
    secs %= SECS_PER_MINUTE;

    let mut out = String::from("P");
    if days > 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours > 0 || minutes > 0 || secs > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes > 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if secs > 0 {
            out.push_str(&format!("{secs}S"));
        }
    }
    out
}

/// Serde adapter for `Option<Duration>` fields carried as ISO-8601 strings.
pub mod option_iso8601 {
    use super::{format_iso8601, parse_iso8601};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(duration) => serializer.serialize_str(&format_iso8601(*duration)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) => parse_iso8601(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 duration: {s}"))),
        }
    }
}

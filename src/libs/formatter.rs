//! Time duration formatting and parsing utilities.
//!
//! This module converts `chrono::Duration` values to and from the short
//! textual forms used on the command line, in configuration and in tables.
//!
//! ## Format Specifications
//!
//! ### Display
//! Durations are displayed as "HH:MM":
//! - Hours are zero-padded to 2 digits
//! - Minutes are zero-padded to 2 digits
//! - Seconds are not displayed
//! - Negative durations are treated as "00:00"
//!
//! ### Input
//! Target durations are accepted as:
//! - "HH:MM" (`02:30`)
//! - Unit-suffixed parts (`2h`, `90m`, `45s`, `1h30m`)
//! - A bare number of minutes (`120`)
//!
//! A leading `-` is accepted and yields a negative duration. Rejecting
//! non-positive targets is the normalizer's job, not the parser's.
//!
//! ## Examples
//!
//! ```rust
//! use worknorm::libs::formatter::{format_duration, parse_duration};
//! use chrono::Duration;
//!
//! let duration = Duration::hours(2) + Duration::minutes(30);
//! assert_eq!(format_duration(&duration), "02:30");
//! assert_eq!(parse_duration("2h30m").unwrap(), duration);
//! assert_eq!(parse_duration("02:30").unwrap(), duration);
//! ```

use chrono::{Duration, NaiveDateTime};
use thiserror::Error;

/// Timestamp layout used in console tables.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid duration '{0}', expected HH:MM or a value like 2h, 90m, 1h30m")]
    InvalidDuration(String),
}

/// Formats a chrono::Duration into a standardized "HH:MM" string.
///
/// # Examples
///
/// ```rust
/// use worknorm::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::hours(8)), "08:00");
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&Duration::zero()), "00:00");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    // Negative remainders would print as "-1:-30"
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a timestamp for table output ("YYYY-MM-DD HH:MM").
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a user-supplied duration.
///
/// # Errors
///
/// Returns [`FormatError::InvalidDuration`] for empty input, unknown units,
/// a unit without a number, or minutes of 60 and above in "HH:MM" form.
pub fn parse_duration(input: &str) -> Result<Duration, FormatError> {
    let invalid = || FormatError::InvalidDuration(input.to_string());
    let trimmed = input.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    if body.is_empty() {
        return Err(invalid());
    }

    let duration = if let Some((hours, minutes)) = body.split_once(':') {
        let hours: i64 = hours.parse().map_err(|_| invalid())?;
        let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
        if !(0..60).contains(&minutes) || hours < 0 {
            return Err(invalid());
        }
        Duration::try_hours(hours)
            .and_then(|h| h.checked_add(&Duration::minutes(minutes)))
            .ok_or_else(invalid)?
    } else if body.chars().all(|c| c.is_ascii_digit()) {
        Duration::try_minutes(body.parse().map_err(|_| invalid())?).ok_or_else(invalid)?
    } else {
        parse_unit_parts(body).ok_or_else(invalid)?
    };

    Ok(if negative { -duration } else { duration })
}

// "1h30m" -> 1h + 30m; every part needs both a number and a unit.
fn parse_unit_parts(body: &str) -> Option<Duration> {
    let mut total = Duration::zero();
    let mut digits = String::new();

    for c in body.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let value: i64 = digits.parse().ok()?;
        digits.clear();
        let part = match c.to_ascii_lowercase() {
            'h' => Duration::try_hours(value)?,
            'm' => Duration::try_minutes(value)?,
            's' => Duration::try_seconds(value)?,
            _ => return None,
        };
        total = total.checked_add(&part)?;
    }

    // Trailing number without a unit
    if !digits.is_empty() {
        return None;
    }
    Some(total)
}

//! Field validation at the input-collection boundary
//!
//! The schedule itself stores plain strings; these helpers make sure what
//! reaches it is well formed.

use crate::domain::{Weekday, WeekdaySet};
use crate::error::{Result, ScheduleError};
use chrono::{NaiveDate, NaiveTime};
use std::str::FromStr;

/// Parse a 24-hour `H:MM` or `HH:MM` time, normalized to zero-padded `HH:MM`
pub fn parse_time(input: &str) -> Result<String> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map(|time| time.format("%H:%M").to_string())
        .map_err(|_| ScheduleError::InvalidTime(input.to_string()))
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(input: &str) -> Result<String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|_| ScheduleError::InvalidDate(input.to_string()))
}

/// Parse a comma separated weekday list such as `monday,Wed`
pub fn parse_days(input: &str) -> Result<WeekdaySet> {
    let days = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(Weekday::from_str)
        .collect::<Result<WeekdaySet>>()?;

    if days.is_empty() {
        return Err(ScheduleError::InvalidInput(
            "at least one weekday is required".to_string(),
        ));
    }

    Ok(days)
}

/// Trimmed value of a required text field
pub fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ScheduleError::InvalidInput(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{GodzinaError, Result};
use crate::types::time_of_day::TimeOfDay;

const TIME_PATTERN: &str = r"^(\d{1,2}):(\d{2})$";

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TIME_PATTERN).expect("TIME_PATTERN is a valid regex"))
}

/// Parses `H:MM` or `HH:MM` into a validated [`TimeOfDay`].
/// Leading and trailing whitespace is ignored.
pub fn parse_time(input: &str) -> Result<TimeOfDay> {
    let trimmed = input.trim();
    let caps = time_regex()
        .captures(trimmed)
        .ok_or_else(|| GodzinaError::InvalidTimeFormat(input.to_string()))?;

    // `\d` is Unicode-aware; non-ASCII digits fail to parse here.
    let hour: u32 = caps[1]
        .parse()
        .map_err(|_| GodzinaError::InvalidTimeFormat(input.to_string()))?;
    let minute: u32 = caps[2]
        .parse()
        .map_err(|_| GodzinaError::InvalidTimeFormat(input.to_string()))?;

    TimeOfDay::new(hour, minute)
}

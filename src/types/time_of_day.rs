use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GodzinaError, Result};

pub const HOURS_PER_DAY: u8 = 24;
pub const MINUTES_PER_HOUR: u8 = 60;

/// The hour after `hour` on a 24-hour clock, wrapping 23 to 0.
pub fn next_hour_index(hour: usize) -> usize {
    (hour + 1) % HOURS_PER_DAY as usize
}

/// A validated wall-clock time, hour in 0..=23 and minute in 0..=59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour >= HOURS_PER_DAY as u32 {
            return Err(GodzinaError::HourOutOfRange(hour));
        }
        if minute >= MINUTES_PER_HOUR as u32 {
            return Err(GodzinaError::MinuteOutOfRange(minute));
        }
        Ok(TimeOfDay {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The hour that follows this one, wrapping 23 to 0.
    pub fn next_hour(&self) -> u8 {
        next_hour_index(self.hour as usize) as u8
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = GodzinaError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parsing::time_parser::parse_time(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = GodzinaError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

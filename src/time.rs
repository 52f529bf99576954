//! `Time` value object: hour, minute and second of a day.
//!
//! Values are immutable; the clock derives new ones with [`Time::with_hour`]
//! and [`Time::with_minute`] as the user picks. The canonical string form is
//! zero-padded `HH:MM:SS`, which is also the serde representation.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{HOURS_PER_DAY, MINUTES_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::TimeError;

/// A time of day with second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
}

impl Time {
    /// `00:00:00`.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0, second: 0 };

    /// Build a time from its fields.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError`] when a field is out of range.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        let hour = bounded(hour, HOURS_PER_DAY).ok_or(TimeError::Hour(hour))?;
        let minute = bounded(minute, MINUTES_PER_HOUR).ok_or(TimeError::Minute(minute))?;
        let second = bounded(second, SECONDS_PER_MINUTE).ok_or(TimeError::Second(second))?;
        Ok(Self { hour, minute, second })
    }

    /// Build a time on the whole minute (`second = 0`).
    ///
    /// # Errors
    ///
    /// Returns [`TimeError`] when a field is out of range.
    pub fn hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        Self::new(hour, minute, 0)
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }

    #[must_use]
    pub fn second(self) -> u8 {
        self.second
    }

    /// Copy with a new hour. Values wrap modulo 24.
    #[must_use]
    pub fn with_hour(self, hour: u8) -> Self {
        Self { hour: hour % HOURS_PER_DAY, ..self }
    }

    /// Copy with a new minute. Values wrap modulo 60.
    #[must_use]
    pub fn with_minute(self, minute: u8) -> Self {
        Self { minute: minute % MINUTES_PER_HOUR, ..self }
    }
}

fn bounded(value: u32, limit: u8) -> Option<u8> {
    match u8::try_from(value) {
        Ok(v) if v < limit => Some(v),
        _ => None,
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for Time {
    type Err = TimeError;

    /// Parse `HH:MM` or `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || TimeError::Format(s.to_owned());
        let mut fields = [0_u32; 3];
        let mut count = 0;
        for part in s.trim().split(':') {
            if count == fields.len() || part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format_err());
            }
            fields[count] = part.parse().map_err(|_| format_err())?;
            count += 1;
        }
        if count < 2 {
            return Err(format_err());
        }
        Self::new(fields[0], fields[1], fields[2])
    }
}

impl TryFrom<String> for Time {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Time> for String {
    fn from(value: Time) -> Self {
        value.to_string()
    }
}

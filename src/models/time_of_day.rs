//! Wall-clock time of day.
//!
//! Shift boundaries and check-in/check-out marks are plain `HH:MM` values
//! with no date or zone attached. [`TimeOfDay`] stores them as minutes since
//! midnight, which is the unit the attendance rules are written in.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: i32 = 1440;

/// A time of day with minute precision, in `[00:00, 23:59]`.
///
/// Parses from `HH:MM` and also accepts `HH:MM:SS` (seconds are dropped),
/// which is how `time` columns come back from the database.
///
/// # Example
///
/// ```
/// use attendance_engine::models::TimeOfDay;
///
/// let t: TimeOfDay = "09:15".parse().unwrap();
/// assert_eq!(t.minutes(), 555);
/// assert_eq!(t.to_string(), "09:15");
///
/// let with_seconds: TimeOfDay = "18:00:00".parse().unwrap();
/// assert_eq!(with_seconds.minutes(), 1080);
///
/// assert!("25:00".parse::<TimeOfDay>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight (`00:00`).
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Builds a time from hours and minutes, or `None` when out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(TimeOfDay((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Minutes elapsed since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// The hour component.
    pub fn hour(self) -> u32 {
        u32::from(self.0 / 60)
    }

    /// The minute component.
    pub fn minute(self) -> u32 {
        u32::from(self.0 % 60)
    }

    /// Anchors this time to a calendar date.
    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::from(self))
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .map(TimeOfDay::from)
            .map_err(|_| EngineError::InvalidTime {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay((time.hour() * 60 + time.minute()) as u16)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

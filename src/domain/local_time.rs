//! Wall-clock time of day without date or timezone

use crate::error::{Result, ScheduleError};
use chrono::NaiveTime;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Hour/minute pair. Stored as `HH:MM` (24-hour, zero-padded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime {
    hour: u32,
    minute: u32,
}

impl LocalTime {
    pub const MIDNIGHT: LocalTime = LocalTime { hour: 0, minute: 0 };

    /// Create a time, rejecting hours outside 0-23 and minutes outside 0-59
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        let time = LocalTime { hour, minute };
        if !time.is_well_formed() {
            return Err(ScheduleError::InvalidTime { hour, minute });
        }
        Ok(time)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Only false for values read from storage without range checks
    pub fn is_well_formed(&self) -> bool {
        self.hour <= 23 && self.minute <= 59
    }

    /// 12-hour display such as `9:05 AM` or `12:00 PM`
    pub fn format_display(&self) -> String {
        let (display_hour, period) = match self.hour {
            0 => (12, "AM"),
            1..=11 => (self.hour, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{}:{:02} {}", display_hour, self.minute, period)
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }

    /// Split `HH:MM` into numeric parts without checking their ranges
    fn parse_parts(s: &str) -> Option<(u32, u32)> {
        let (hour, minute) = s.trim().split_once(':')?;
        let is_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
        if !is_digits(hour) || !is_digits(minute) || minute.len() != 2 {
            return None;
        }
        Some((hour.parse().ok()?, minute.parse().ok()?))
    }
}

impl Default for LocalTime {
    fn default() -> Self {
        LocalTime { hour: 9, minute: 0 }
    }
}

impl From<NaiveTime> for LocalTime {
    fn from(time: NaiveTime) -> Self {
        use chrono::Timelike;
        LocalTime {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for LocalTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        let (hour, minute) = Self::parse_parts(s)
            .ok_or_else(|| ScheduleError::InvalidEdit(format!("Expected HH:MM, got '{}'", s)))?;
        LocalTime::new(hour, minute)
    }
}

impl Serialize for LocalTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocalTime {
    /// Lenient about ranges so a stored `25:00` is reported by validation
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let (hour, minute) = Self::parse_parts(&raw)
            .ok_or_else(|| D::Error::custom(format!("expected HH:MM, got '{}'", raw)))?;
        Ok(LocalTime { hour, minute })
    }
}

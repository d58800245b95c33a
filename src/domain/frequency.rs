//! How often, and on which days, a habit occurs

use crate::domain::weekday::{DaySet, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Fewest check-ins a habit can ask for in a day
pub const MIN_TIMES_PER_DAY: u32 = 1;
/// Most check-ins a habit can ask for in a day
pub const MAX_TIMES_PER_DAY: u32 = 10;

/// Recurrence classification of a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyType {
    /// Every day of the week
    #[default]
    Daily,
    /// A fixed weekly pattern, starting from Mon/Wed/Fri
    Weekly,
    /// An arbitrary subset of days
    Custom,
}

impl fmt::Display for FrequencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FrequencyType::Daily => "daily",
            FrequencyType::Weekly => "weekly",
            FrequencyType::Custom => "custom",
        };
        f.write_str(name)
    }
}

impl FromStr for FrequencyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(FrequencyType::Daily),
            "weekly" => Ok(FrequencyType::Weekly),
            "custom" => Ok(FrequencyType::Custom),
            _ => Err(format!(
                "Invalid frequency type: '{}'. Valid types are: daily, weekly, custom",
                s
            )),
        }
    }
}

/// Which days a habit is scheduled on and how many times per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyRule {
    #[serde(rename = "type")]
    frequency_type: FrequencyType,
    days: DaySet,
    times_per_day: u32,
}

impl Default for FrequencyRule {
    fn default() -> Self {
        FrequencyRule {
            frequency_type: FrequencyType::Daily,
            days: DaySet::full(),
            times_per_day: MIN_TIMES_PER_DAY,
        }
    }
}

impl FrequencyRule {
    /// Build a rule from raw parts. A daily rule always covers the full week;
    /// other values are kept as given and checked by validation.
    pub fn new(frequency_type: FrequencyType, days: DaySet, times_per_day: u32) -> Self {
        let days = match frequency_type {
            FrequencyType::Daily => DaySet::full(),
            _ => days,
        };
        FrequencyRule {
            frequency_type,
            days,
            times_per_day,
        }
    }

    pub fn frequency_type(&self) -> FrequencyType {
        self.frequency_type
    }

    pub fn days(&self) -> DaySet {
        self.days
    }

    pub fn times_per_day(&self) -> u32 {
        self.times_per_day
    }

    /// Days the habit is actually due. Daily habits are due every day even if
    /// the stored day list says otherwise.
    pub fn active_days(&self) -> DaySet {
        match self.frequency_type {
            FrequencyType::Daily => DaySet::full(),
            _ => self.days,
        }
    }

    pub fn is_daily(&self) -> bool {
        self.frequency_type == FrequencyType::Daily
    }

    /// Change the frequency type and derive the day set:
    /// - daily forces all seven days
    /// - weekly resets to Mon/Wed/Fri, but only when entered from another type
    /// - custom keeps the current days
    pub fn set_type(&mut self, new_type: FrequencyType) {
        let previous = self.frequency_type;
        self.frequency_type = new_type;

        match new_type {
            FrequencyType::Daily => {
                self.days = DaySet::full();
            }
            FrequencyType::Weekly if previous != FrequencyType::Weekly => {
                self.days = DaySet::weekly_default();
            }
            FrequencyType::Weekly | FrequencyType::Custom => {}
        }

        debug!(from = %previous, to = %new_type, days = %self.days, "frequency type changed");
    }

    /// Add `day` if absent, remove it if present. Removing the last remaining
    /// day is refused and leaves the set unchanged, and daily rules always keep
    /// the full week. Returns whether the set changed.
    pub fn toggle_day(&mut self, day: Weekday) -> bool {
        if self.is_daily() {
            debug!(%day, "daily frequency keeps every day");
            return false;
        }
        toggle_keeping_one(&mut self.days, day)
    }

    /// Add `delta` to the times-per-day count, saturating at 1 and 10
    pub fn set_times_per_day(&mut self, delta: i32) {
        let target = i64::from(self.times_per_day) + i64::from(delta);
        let clamped = target.clamp(
            i64::from(MIN_TIMES_PER_DAY),
            i64::from(MAX_TIMES_PER_DAY),
        );
        self.times_per_day = clamped as u32;
        debug!(delta, times_per_day = self.times_per_day, "times per day adjusted");
    }
}

/// Shared toggle for frequency and reminder day sets
pub(crate) fn toggle_keeping_one(days: &mut DaySet, day: Weekday) -> bool {
    if days.contains(day) {
        if days.len() == 1 {
            debug!(%day, "refusing to remove the last remaining day");
            return false;
        }
        days.remove(day);
    } else {
        days.insert(day);
    }
    debug!(%day, days = %days, "day toggled");
    true
}

//! Whether, when, and on which days a habit reminder fires

use crate::domain::frequency::{toggle_keeping_one, FrequencyRule};
use crate::domain::local_time::LocalTime;
use crate::domain::weekday::{DaySet, Weekday};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderRule {
    enabled: bool,
    time: LocalTime,
    days: DaySet,
}

impl Default for ReminderRule {
    fn default() -> Self {
        ReminderRule::new(true, LocalTime::default(), DaySet::full())
    }
}

impl ReminderRule {
    pub fn new(enabled: bool, time: LocalTime, days: DaySet) -> Self {
        ReminderRule {
            enabled,
            time,
            days,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn time(&self) -> LocalTime {
        self.time
    }

    pub fn days(&self) -> DaySet {
        self.days
    }

    pub fn set_enabled(&mut self, flag: bool) {
        self.enabled = flag;
        debug!(enabled = flag, "reminder toggled");
    }

    /// Replace the reminder time. Out-of-range values are rejected and the
    /// previous time is kept.
    pub fn set_time(&mut self, hour: u32, minute: u32) -> Result<()> {
        self.time = LocalTime::new(hour, minute)?;
        debug!(time = %self.time, "reminder time set");
        Ok(())
    }

    /// Same add/remove semantics as [`FrequencyRule::toggle_day`]
    pub fn toggle_day(&mut self, day: Weekday) -> bool {
        toggle_keeping_one(&mut self.days, day)
    }

    /// Replace the day set wholesale; used when reconciling with a frequency
    pub(crate) fn set_days(&mut self, days: DaySet) {
        self.days = days;
    }

    /// The reminder time as shown to the user, e.g. `7:30 AM`
    pub fn format_display(&self) -> String {
        self.time.format_display()
    }

    /// Day selection only matters for an enabled reminder on a non-daily habit
    pub fn visible_day_selector(&self, frequency: &FrequencyRule) -> bool {
        self.enabled && !frequency.is_daily()
    }

    /// Days the reminder fires on. Daily habits hide day selection, so their
    /// reminders fire every day regardless of the stored days.
    pub fn effective_days(&self, frequency: &FrequencyRule) -> DaySet {
        if frequency.is_daily() {
            DaySet::full()
        } else {
            self.days
        }
    }
}

//! A habit's frequency together with its dependent reminder

use crate::domain::frequency::{FrequencyRule, MAX_TIMES_PER_DAY, MIN_TIMES_PER_DAY};
use crate::domain::reminder::ReminderRule;
use crate::domain::weekday::{DaySet, Weekday};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rule the combined schedule breaks. Reported all at once by
/// [`HabitSchedule::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Frequency must include at least one day")]
    EmptyFrequencyDays,

    #[error("Times per day must be between 1 and 10, got {0}")]
    TimesPerDayOutOfRange(u32),

    #[error("Reminder time {hour:02}:{minute:02} is not a valid time of day")]
    MalformedReminderTime { hour: u32, minute: u32 },

    #[error("Reminder must include at least one day")]
    EmptyReminderDays,

    #[error("Reminder is set for days the habit is not scheduled on: {extra}")]
    ReminderDaysNotSubset { extra: DaySet },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HabitSchedule {
    pub(crate) frequency: FrequencyRule,
    pub(crate) reminder: ReminderRule,
}

impl HabitSchedule {
    pub fn new(frequency: FrequencyRule, reminder: ReminderRule) -> Self {
        HabitSchedule {
            frequency,
            reminder,
        }
    }

    pub fn frequency(&self) -> &FrequencyRule {
        &self.frequency
    }

    pub fn reminder(&self) -> &ReminderRule {
        &self.reminder
    }

    /// Check every rule and return one error per violation, in a fixed order
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.frequency.days().is_empty() {
            errors.push(ValidationError::EmptyFrequencyDays);
        }

        let times = self.frequency.times_per_day();
        if !(MIN_TIMES_PER_DAY..=MAX_TIMES_PER_DAY).contains(&times) {
            errors.push(ValidationError::TimesPerDayOutOfRange(times));
        }

        if self.reminder.enabled() {
            let time = self.reminder.time();
            if !time.is_well_formed() {
                errors.push(ValidationError::MalformedReminderTime {
                    hour: time.hour(),
                    minute: time.minute(),
                });
            }

            if !self.frequency.is_daily() {
                let reminder_days = self.reminder.days();
                if reminder_days.is_empty() {
                    errors.push(ValidationError::EmptyReminderDays);
                } else if !reminder_days.is_subset(&self.frequency.days()) {
                    errors.push(ValidationError::ReminderDaysNotSubset {
                        extra: reminder_days.difference(&self.frequency.days()),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.frequency
            .active_days()
            .contains(Weekday::from(date.weekday()))
    }

    /// Number of check-ins expected on `date`
    pub fn occurrences_on(&self, date: NaiveDate) -> u32 {
        if self.is_due_on(date) {
            self.frequency.times_per_day()
        } else {
            0
        }
    }

    pub fn reminder_fires_on(&self, date: NaiveDate) -> bool {
        self.reminder.enabled()
            && self.is_due_on(date)
            && self
                .reminder
                .effective_days(&self.frequency)
                .contains(Weekday::from(date.weekday()))
    }

    /// First reminder strictly after `after`, or `None` if the reminder never fires
    pub fn next_reminder_after(&self, after: NaiveDateTime) -> Option<NaiveDateTime> {
        if !self.reminder.enabled() {
            return None;
        }
        let time = self.reminder.time().to_naive_time()?;

        // Today plus a full week covers the same weekday one week out
        (0..=7)
            .filter_map(|offset| after.date().checked_add_days(Days::new(offset)))
            .filter(|date| self.reminder_fires_on(*date))
            .map(|date| date.and_time(time))
            .find(|candidate| *candidate > after)
    }

    /// Successive reminder firings after `after`
    pub fn upcoming_reminders(&self, after: NaiveDateTime) -> impl Iterator<Item = NaiveDateTime> {
        let schedule = *self;
        std::iter::successors(schedule.next_reminder_after(after), move |previous| {
            schedule.next_reminder_after(*previous)
        })
    }
}

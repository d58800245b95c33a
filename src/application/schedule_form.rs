//! Habit schedule editing session

use crate::domain::{
    DaySet, FrequencyRule, FrequencyType, HabitSchedule, ReminderRule, ValidationError, Weekday,
};
use crate::error::Result;
use crate::infrastructure::Config;
use tracing::debug;

/// Holds one frequency and one reminder for the duration of an edit and keeps
/// the reminder's days inside the frequency's days.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HabitScheduleForm {
    schedule: HabitSchedule,
    time_picker_open: bool,
}

impl HabitScheduleForm {
    /// Start a new habit: daily, once a day, reminder on every day
    pub fn new() -> Self {
        HabitScheduleForm::default()
    }

    /// Start a new habit using the configured reminder defaults
    pub fn from_config(config: &Config) -> Self {
        let reminder = ReminderRule::new(
            config.default_reminder_enabled,
            config.default_reminder_time,
            DaySet::full(),
        );
        HabitScheduleForm::from_schedule(HabitSchedule::new(FrequencyRule::default(), reminder))
    }

    /// Resume editing a stored schedule as-is. Nothing is reconciled so that
    /// `validate` can report whatever was stored.
    pub fn from_schedule(schedule: HabitSchedule) -> Self {
        HabitScheduleForm {
            schedule,
            time_picker_open: false,
        }
    }

    pub fn schedule(&self) -> &HabitSchedule {
        &self.schedule
    }

    pub fn frequency(&self) -> &FrequencyRule {
        self.schedule.frequency()
    }

    pub fn reminder(&self) -> &ReminderRule {
        self.schedule.reminder()
    }

    /// Replace the frequency half, then pull the reminder days back inside it
    pub fn apply_frequency_change(&mut self, rule: FrequencyRule) {
        self.schedule.frequency = rule;
        self.reconcile_reminder_days();
    }

    /// Replace the reminder half, then pull its days back inside the frequency
    pub fn apply_reminder_change(&mut self, rule: ReminderRule) {
        self.schedule.reminder = rule;
        if !rule.enabled() {
            self.time_picker_open = false;
        }
        self.reconcile_reminder_days();
    }

    /// Reminder days become their intersection with the frequency days, or the
    /// whole frequency day set if nothing would be left.
    fn reconcile_reminder_days(&mut self) {
        let frequency_days = self.schedule.frequency.days();
        let reminder_days = self.schedule.reminder.days();

        if frequency_days.is_empty() || reminder_days.is_subset(&frequency_days) {
            return;
        }

        let kept = reminder_days.intersection(&frequency_days);
        let reconciled = if kept.is_empty() { frequency_days } else { kept };

        debug!(
            before = %reminder_days,
            after = %reconciled,
            frequency = %frequency_days,
            "reminder days reconciled"
        );
        self.schedule.reminder.set_days(reconciled);
    }

    pub fn set_type(&mut self, new_type: FrequencyType) {
        let mut rule = *self.frequency();
        rule.set_type(new_type);
        self.apply_frequency_change(rule);
    }

    pub fn toggle_frequency_day(&mut self, day: Weekday) {
        let mut rule = *self.frequency();
        rule.toggle_day(day);
        self.apply_frequency_change(rule);
    }

    pub fn set_times_per_day(&mut self, delta: i32) {
        let mut rule = *self.frequency();
        rule.set_times_per_day(delta);
        self.apply_frequency_change(rule);
    }

    pub fn set_reminder_enabled(&mut self, flag: bool) {
        let mut rule = *self.reminder();
        rule.set_enabled(flag);
        self.apply_reminder_change(rule);
    }

    /// Set the reminder time and close the picker. Invalid times leave both
    /// the time and the picker untouched.
    pub fn set_reminder_time(&mut self, hour: u32, minute: u32) -> Result<()> {
        let mut rule = *self.reminder();
        rule.set_time(hour, minute)?;
        self.apply_reminder_change(rule);
        self.time_picker_open = false;
        Ok(())
    }

    pub fn toggle_reminder_day(&mut self, day: Weekday) {
        let mut rule = *self.reminder();
        rule.toggle_day(day);
        self.apply_reminder_change(rule);
    }

    pub fn open_time_picker(&mut self) {
        self.time_picker_open = true;
    }

    pub fn close_time_picker(&mut self) {
        self.time_picker_open = false;
    }

    pub fn is_time_picker_open(&self) -> bool {
        self.time_picker_open
    }

    pub fn display_time(&self) -> String {
        self.reminder().format_display()
    }

    pub fn visible_day_selector(&self) -> bool {
        self.reminder().visible_day_selector(self.frequency())
    }

    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        self.schedule.validate()
    }

    /// Finish editing. The schedule is only handed out if it validates.
    pub fn submit(self) -> std::result::Result<HabitSchedule, Vec<ValidationError>> {
        self.schedule.validate()?;
        debug!("schedule submitted");
        Ok(self.schedule)
    }

    /// Abandon the edit session
    pub fn cancel(self) {
        debug!("schedule edit cancelled");
    }
}

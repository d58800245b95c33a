//! Textual user intents applied to a schedule form

use crate::application::HabitScheduleForm;
use crate::domain::{FrequencyType, LocalTime, Weekday};
use crate::error::{Result, ScheduleError};
use std::str::FromStr;

/// One discrete user edit, written as `key=value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// `type=daily|weekly|custom`
    SetType(FrequencyType),
    /// `day=<weekday>`
    ToggleDay(Weekday),
    /// `times=+1`, `times=-2`
    AdjustTimesPerDay(i32),
    /// `reminder=on|off`
    SetReminderEnabled(bool),
    /// `time=HH:MM`
    SetReminderTime(LocalTime),
    /// `reminder-day=<weekday>`
    ToggleReminderDay(Weekday),
}

impl Edit {
    pub fn apply(self, form: &mut HabitScheduleForm) -> Result<()> {
        match self {
            Edit::SetType(frequency_type) => form.set_type(frequency_type),
            Edit::ToggleDay(day) => form.toggle_frequency_day(day),
            Edit::AdjustTimesPerDay(delta) => form.set_times_per_day(delta),
            Edit::SetReminderEnabled(flag) => form.set_reminder_enabled(flag),
            Edit::SetReminderTime(time) => form.set_reminder_time(time.hour(), time.minute())?,
            Edit::ToggleReminderDay(day) => form.toggle_reminder_day(day),
        }
        Ok(())
    }
}

impl FromStr for Edit {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| ScheduleError::InvalidEdit(format!("Expected key=value, got '{}'", s)))?;
        let value = value.trim();

        match key.trim().to_lowercase().as_str() {
            "type" => FrequencyType::from_str(value)
                .map(Edit::SetType)
                .map_err(ScheduleError::InvalidEdit),
            "day" => Ok(Edit::ToggleDay(value.parse()?)),
            "times" => value
                .parse::<i32>()
                .map(Edit::AdjustTimesPerDay)
                .map_err(|_| ScheduleError::InvalidEdit(format!("Invalid times delta: '{}'", value))),
            "reminder" => match value.to_lowercase().as_str() {
                "on" | "true" | "yes" => Ok(Edit::SetReminderEnabled(true)),
                "off" | "false" | "no" => Ok(Edit::SetReminderEnabled(false)),
                _ => Err(ScheduleError::InvalidEdit(format!(
                    "Invalid reminder switch: '{}'. Use on or off",
                    value
                ))),
            },
            "time" => Ok(Edit::SetReminderTime(value.parse()?)),
            "reminder-day" => Ok(Edit::ToggleReminderDay(value.parse()?)),
            other => Err(ScheduleError::InvalidEdit(format!("Unknown edit key: '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edits() {
        assert_eq!(
            "type=weekly".parse::<Edit>().unwrap(),
            Edit::SetType(FrequencyType::Weekly)
        );
        assert_eq!(
            "day=sat".parse::<Edit>().unwrap(),
            Edit::ToggleDay(Weekday::SATURDAY)
        );
        assert_eq!(
            "times=+2".parse::<Edit>().unwrap(),
            Edit::AdjustTimesPerDay(2)
        );
        assert_eq!(
            "times=-1".parse::<Edit>().unwrap(),
            Edit::AdjustTimesPerDay(-1)
        );
        assert_eq!(
            "reminder=off".parse::<Edit>().unwrap(),
            Edit::SetReminderEnabled(false)
        );
        assert_eq!(
            "time=07:30".parse::<Edit>().unwrap(),
            Edit::SetReminderTime(LocalTime::new(7, 30).unwrap())
        );
        assert_eq!(
            "reminder-day=1".parse::<Edit>().unwrap(),
            Edit::ToggleReminderDay(Weekday::MONDAY)
        );
    }

    #[test]
    fn test_parse_invalid_edits() {
        assert!(matches!(
            "weekly".parse::<Edit>(),
            Err(ScheduleError::InvalidEdit(_))
        ));
        assert!(matches!(
            "type=monthly".parse::<Edit>(),
            Err(ScheduleError::InvalidEdit(_))
        ));
        assert!(matches!(
            "day=7".parse::<Edit>(),
            Err(ScheduleError::InvalidWeekday(7))
        ));
        assert!(matches!(
            "time=24:00".parse::<Edit>(),
            Err(ScheduleError::InvalidTime { .. })
        ));
        assert!(matches!(
            "colour=red".parse::<Edit>(),
            Err(ScheduleError::InvalidEdit(_))
        ));
    }

    #[test]
    fn test_apply_sequence() {
        let mut form = HabitScheduleForm::new();
        for raw in ["type=weekly", "day=sat", "times=+1", "time=20:05", "reminder-day=mon"] {
            raw.parse::<Edit>().unwrap().apply(&mut form).unwrap();
        }

        assert_eq!(form.frequency().days().to_vec(), vec![1, 3, 5, 6]);
        assert_eq!(form.frequency().times_per_day(), 2);
        assert_eq!(form.reminder().days().to_vec(), vec![3, 5]);
        assert_eq!(form.display_time(), "8:05 PM");
    }
}

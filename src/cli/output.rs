//! Output formatting utilities

use crate::domain::{FrequencyType, HabitSchedule, ValidationError};
use chrono::NaiveDateTime;

/// Format a schedule for display
pub fn format_schedule(schedule: &HabitSchedule) -> String {
    let frequency = schedule.frequency();
    let reminder = schedule.reminder();

    let days = match frequency.frequency_type() {
        FrequencyType::Daily => "every day".to_string(),
        _ => frequency.days().to_string(),
    };

    let mut output = format!(
        "Frequency: {} ({})\nTimes per day: {}\n",
        frequency.frequency_type(),
        days,
        frequency.times_per_day()
    );

    if !reminder.enabled() {
        output.push_str("Reminder: off\n");
        return output;
    }

    let time = if reminder.time().is_well_formed() {
        reminder.format_display()
    } else {
        format!("invalid time {}", reminder.time())
    };

    if reminder.visible_day_selector(frequency) {
        output.push_str(&format!("Reminder: {} on {}\n", time, reminder.days()));
    } else {
        output.push_str(&format!("Reminder: {} every day\n", time));
    }
    output
}

/// Format validation problems, one per line
pub fn format_validation_errors(errors: &[ValidationError]) -> String {
    let mut output = String::new();
    for error in errors {
        output.push_str(&format!("- {}\n", error));
    }
    output
}

/// Format upcoming reminder times for display
pub fn format_reminder_list(reminders: &[NaiveDateTime]) -> String {
    if reminders.is_empty() {
        return "No upcoming reminders".to_string();
    }

    let mut output = String::new();
    for at in reminders {
        output.push_str(&format!("{}\n", at.format("%a %d-%m-%Y %H:%M")));
    }
    output
}

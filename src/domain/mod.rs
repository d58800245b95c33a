//! Domain layer - Recurrence and reminder rules

pub mod frequency;
pub mod local_time;
pub mod reminder;
pub mod schedule;
pub mod weekday;

pub use frequency::{FrequencyRule, FrequencyType, MAX_TIMES_PER_DAY, MIN_TIMES_PER_DAY};
pub use local_time::LocalTime;
pub use reminder::ReminderRule;
pub use schedule::{HabitSchedule, ValidationError};
pub use weekday::{DaySet, Weekday};

//! Application layer - Edit sessions and orchestration

pub mod edit;
pub mod schedule_form;

pub use edit::Edit;
pub use schedule_form::HabitScheduleForm;

//! habitsched - Habit recurrence and reminder scheduling
//!
//! Models how often a habit occurs, when its reminder fires, and keeps the
//! two consistent while a schedule is being edited.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ScheduleError;

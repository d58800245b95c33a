//! Error types for habitsched

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for habitsched
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Invalid time: {hour:02}:{minute:02} (hour must be 0-23, minute 0-59)")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("Invalid weekday: {0} (expected 0-6, 0 = Sunday)")]
    InvalidWeekday(u32),

    #[error("Invalid edit: {0}")]
    InvalidEdit(String),

    #[error("Schedule file not found: {0}")]
    ScheduleNotFound(PathBuf),

    #[error("Schedule file already exists: {0}")]
    ScheduleExists(PathBuf),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Schedule is invalid: {}", format_validation(.0))]
    Validation(Vec<ValidationError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ScheduleError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ScheduleError::ScheduleNotFound(_) | ScheduleError::ConfigNotFound(_) => 2,
            ScheduleError::InvalidTime { .. }
            | ScheduleError::InvalidWeekday(_)
            | ScheduleError::InvalidEdit(_) => 3,
            ScheduleError::Validation(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ScheduleError::ScheduleNotFound(path) => {
                format!(
                    "Schedule file not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'habitsched new {}' to create a default schedule\n\
                    • Check the path for typos",
                    path.display(),
                    path.display()
                )
            }
            ScheduleError::InvalidTime { .. } => {
                format!(
                    "{}\n\n\
                    Expected format: HH:MM (24-hour)\n\
                    Example: habitsched edit habit.json time=07:30",
                    self
                )
            }
            ScheduleError::InvalidWeekday(_) => {
                format!(
                    "{}\n\n\
                    Valid weekdays: 0-6 or sun, mon, tue, wed, thu, fri, sat\n\
                    Example: habitsched edit habit.json day=wed",
                    self
                )
            }
            ScheduleError::InvalidEdit(_) => {
                format!(
                    "{}\n\n\
                    Valid edits:\n\
                    • type=daily|weekly|custom\n\
                    • day=<weekday>, reminder-day=<weekday>\n\
                    • times=+1, times=-1\n\
                    • reminder=on|off\n\
                    • time=HH:MM",
                    self
                )
            }
            ScheduleError::Validation(errors) => {
                let mut msg = String::from("Schedule is invalid:\n");
                for error in errors {
                    msg.push_str(&format!("• {}\n", error));
                }
                msg
            }
            ScheduleError::ScheduleExists(path) => {
                format!(
                    "Schedule file already exists: {}\n\n\
                    Suggestions:\n\
                    • Use 'habitsched edit {}' to change it\n\
                    • Pass --force to overwrite it with defaults",
                    path.display(),
                    path.display()
                )
            }
            ScheduleError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the --config path\n\
                    • Unset HABITSCHED_CONFIG to use built-in defaults",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ScheduleError
pub type Result<T> = std::result::Result<T, ScheduleError>;

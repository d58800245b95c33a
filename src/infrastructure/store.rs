//! Schedule persistence

use crate::domain::HabitSchedule;
use crate::error::{Result, ScheduleError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where finished schedules are handed off to and drafts are read back from
pub trait ScheduleStore {
    /// Location of the stored schedule
    fn location(&self) -> &Path;

    /// Check if a schedule has been stored
    fn exists(&self) -> bool;

    /// Read the stored schedule
    fn load(&self) -> Result<HabitSchedule>;

    /// Store a schedule, replacing any previous one
    fn save(&self, schedule: &HabitSchedule) -> Result<()>;
}

/// One schedule per JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    pub path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }
}

impl ScheduleStore for JsonFileStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<HabitSchedule> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScheduleError::ScheduleNotFound(self.path.clone())
            } else {
                ScheduleError::Io(e)
            }
        })?;

        let schedule = serde_json::from_str(&contents)?;
        debug!(path = %self.path.display(), "schedule loaded");
        Ok(schedule)
    }

    fn save(&self, schedule: &HabitSchedule) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut contents = serde_json::to_string_pretty(schedule)?;
        contents.push('\n');
        fs::write(&self.path, contents)?;

        debug!(path = %self.path.display(), "schedule saved");
        Ok(())
    }
}

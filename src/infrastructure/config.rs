//! Configuration management

use crate::domain::LocalTime;
use crate::error::{Result, ScheduleError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "HABITSCHED_CONFIG";

/// Defaults applied when a new habit schedule is started
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_reminder_time: LocalTime,
    #[serde(default = "default_enabled")]
    pub default_reminder_enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_reminder_time: LocalTime::default(),
            default_reminder_enabled: default_enabled(),
        }
    }
}

impl Config {
    /// Resolve the config to use: an explicit path first, then
    /// HABITSCHED_CONFIG, then built-in defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            return Self::load_from_path(&PathBuf::from(env_path));
        }

        debug!("no config file given, using defaults");
        Ok(Config::default())
    }

    /// Load config from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScheduleError::ConfigNotFound(path.to_path_buf())
            } else {
                ScheduleError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ScheduleError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

        if !config.default_reminder_time.is_well_formed() {
            return Err(ScheduleError::Config(format!(
                "default_reminder_time {} is not a valid time of day",
                config.default_reminder_time
            )));
        }

        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save config as TOML
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

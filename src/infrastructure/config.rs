//! Configuration management

use crate::error::{Result, ScheduleError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-schedule metadata directory
pub const SCHEDULE_DIR: &str = ".stusched";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the exported document is written to, relative to the
    /// schedule root unless absolute
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    pub created: DateTime<Utc>,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            export_dir: default_export_dir(),
            created: Utc::now(),
        }
    }

    /// Load config from .stusched/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(SCHEDULE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScheduleError::NotScheduleDirectory(path.to_path_buf())
            } else {
                ScheduleError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ScheduleError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .stusched/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let schedule_dir = path.join(SCHEDULE_DIR);
        let config_path = schedule_dir.join("config.toml");

        if !schedule_dir.exists() {
            fs::create_dir(&schedule_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ScheduleError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Resolve the export directory against the schedule root
    pub fn resolve_export_dir(&self, root: &Path) -> PathBuf {
        if self.export_dir.is_absolute() {
            self.export_dir.clone()
        } else {
            root.join(&self.export_dir)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

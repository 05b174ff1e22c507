//! File system repository

use crate::error::{Result, ScheduleError};
use crate::infrastructure::config::SCHEDULE_DIR;
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a schedule root
pub const ROOT_ENV_VAR: &str = "STUSCHED_ROOT";

/// Abstract repository for schedule directory operations
pub trait ScheduleRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .stusched/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .stusched/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .stusched directory exists
    fn is_initialized(&self) -> bool;

    /// Create .stusched directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of ScheduleRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the schedule root.
    /// Checks STUSCHED_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV_VAR) {
            let path = PathBuf::from(root_path);
            if Self::has_schedule_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(ScheduleError::Config(format!(
                    "{} is set to '{}' but no .stusched directory found. \
                    Run 'stusched init' in that directory or unset {}.",
                    ROOT_ENV_VAR,
                    path.display(),
                    ROOT_ENV_VAR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the schedule root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_schedule_dir(&current) {
                log::debug!("Found schedule at {}", current.display());
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(ScheduleError::NotScheduleDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_schedule_dir(path: &Path) -> bool {
        path.join(SCHEDULE_DIR).is_dir()
    }

    /// Key-value store backing the schedule snapshot
    pub fn file_store(&self) -> FileStore {
        FileStore::new(self.root.join(SCHEDULE_DIR).join("store"))
    }

    /// Write a text file, creating parent directories as needed
    pub fn write_document(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, content).map_err(ScheduleError::Io)
    }
}

impl ScheduleRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_schedule_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let schedule_dir = self.root.join(SCHEDULE_DIR);

        if schedule_dir.exists() {
            return Err(ScheduleError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&schedule_dir)?;
        Ok(())
    }
}

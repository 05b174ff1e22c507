//! Config management use case

use crate::error::{Result, ScheduleError};
use crate::infrastructure::{Config, FileSystemRepository, ScheduleRepository};
use std::path::PathBuf;

/// Service for managing schedule configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "export_dir" => Ok(config.export_dir.display().to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(ScheduleError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: export_dir, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "export_dir" => {
                if value.trim().is_empty() {
                    return Err(ScheduleError::Config(
                        "export_dir must not be empty".to_string(),
                    ));
                }
                config.export_dir = PathBuf::from(value);
            }
            "created" => {
                return Err(ScheduleError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ScheduleError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: export_dir",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_and_set_export_dir() {
        let (_temp, service) = service();
        assert_eq!(service.get("export_dir").unwrap(), ".");

        service.set("export_dir", "printouts").unwrap();
        assert_eq!(service.get("export_dir").unwrap(), "printouts");
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = service();
        assert!(service.get("created").is_ok());
        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();
        let err = service.get("retention").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'retention'"));
    }
}

//! Error types for stusched

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for stusched application
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Not a stusched directory: {0}")]
    NotScheduleDirectory(PathBuf),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

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

impl ScheduleError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ScheduleError::NotScheduleDirectory(_) => 2,
            ScheduleError::InvalidTime(_)
            | ScheduleError::InvalidDate(_)
            | ScheduleError::InvalidWeekday(_)
            | ScheduleError::InvalidInput(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ScheduleError::NotScheduleDirectory(path) => {
                format!(
                    "Not a stusched directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'stusched init' in this directory to create a new schedule\n\
                    • Navigate to an existing stusched directory\n\
                    • Set STUSCHED_ROOT environment variable to your schedule path",
                    path.display()
                )
            }
            ScheduleError::InvalidTime(value) => {
                format!(
                    "Invalid time: '{}'\n\n\
                    Expected format: HH:MM (24-hour clock)\n\
                    Example: stusched subject add --time 09:30 ...",
                    value
                )
            }
            ScheduleError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: stusched exam add --date 2025-06-12 ...",
                    value
                )
            }
            ScheduleError::InvalidWeekday(value) => {
                format!(
                    "Invalid weekday: '{}'\n\n\
                    Valid weekdays: monday, tuesday, wednesday, thursday, friday, saturday, sunday\n\
                    Example: --days monday,wednesday",
                    value
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ScheduleError
pub type Result<T> = std::result::Result<T, ScheduleError>;

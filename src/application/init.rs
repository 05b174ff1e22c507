//! Initialize schedule use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, ScheduleRepository};
use std::fs;
use std::path::Path;

/// Initialize a new schedule at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    log::info!("Initialized schedule at {}", path.display());
    println!("Initialized stusched schedule at {}", path.display());

    Ok(())
}

//! Export use case

use crate::application::ScheduleService;
use crate::domain::EXPORT_FILENAME;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, KeyValueStore, ScheduleRepository};
use std::path::PathBuf;

/// Write the schedule document and return where it went.
///
/// Without an explicit output path the document lands in the configured
/// export directory under its fixed file name.
pub fn export_document<S: KeyValueStore>(
    repository: &FileSystemRepository,
    service: &ScheduleService<S>,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    let target = match output {
        Some(path) => path,
        None => {
            let config = repository.load_config()?;
            config
                .resolve_export_dir(repository.root())
                .join(EXPORT_FILENAME)
        }
    };

    let document = service.export();
    repository.write_document(&target, &document.render_text())?;
    log::info!(
        "Exported {} page(s) to {}",
        document.pages.len(),
        target.display()
    );

    Ok(target)
}

//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod snapshot;
pub mod storage;

pub use config::Config;
pub use repository::{FileSystemRepository, ScheduleRepository};
pub use snapshot::{LoadStatus, SnapshotStore, RETENTION_WINDOW_MS, STORAGE_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

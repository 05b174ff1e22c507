//! Application layer - Use cases and orchestration

pub mod export_document;
pub mod init;
pub mod manage_config;
pub mod schedule_service;

pub use export_document::export_document;
pub use manage_config::ConfigService;
pub use schedule_service::ScheduleService;

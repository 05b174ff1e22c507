//! stusched - Student schedule tracker
//!
//! Keeps weekly recurring subjects and one-off exams in a directory-local
//! store, shows them grouped by weekday, and exports a paginated summary.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ScheduleError;

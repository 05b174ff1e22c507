//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ExamAction, SubjectAction};
pub use output::{format_day, format_exam_list, format_subject_list, format_week};

//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stusched")]
#[command(about = "Student schedule tracker for subjects and exams", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new schedule
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Manage weekly subjects
    Subject {
        #[command(subcommand)]
        action: SubjectAction,
    },

    /// Manage exams
    Exam {
        #[command(subcommand)]
        action: ExamAction,
    },

    /// Show subjects grouped by weekday, followed by exams
    Week {
        /// Only show one weekday (e.g., monday, fri, today)
        #[arg(short, long)]
        day: Option<String>,
    },

    /// Export the schedule to a paginated text document
    Export {
        /// Output file (default: <export_dir>/student_schedule.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove all subjects and exams
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum SubjectAction {
    /// Add a subject
    Add {
        /// Subject name
        #[arg(short, long)]
        name: String,

        /// Teacher name
        #[arg(short, long)]
        teacher: String,

        /// Start time (HH:MM, 24-hour)
        #[arg(long)]
        time: String,

        /// Comma separated weekdays (e.g., monday,wednesday)
        #[arg(short, long)]
        days: String,
    },

    /// Remove a subject by id
    Remove { id: String },

    /// List subjects in the order they were added
    List,
}

#[derive(Subcommand, Debug)]
pub enum ExamAction {
    /// Add an exam
    Add {
        /// Exam name
        #[arg(short, long)]
        name: String,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Start time (HH:MM, 24-hour)
        #[arg(long)]
        time: String,

        /// Where the exam takes place
        #[arg(short, long)]
        location: String,
    },

    /// Remove an exam by id
    Remove { id: String },

    /// List exams in the order they were added
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subject_add() {
        let cli = Cli::try_parse_from([
            "stusched", "subject", "add", "--name", "Math", "--teacher", "Mr. Lin", "--time",
            "9:00", "--days", "monday,friday",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Subject {
                action: SubjectAction::Add { name, days, .. },
            }) => {
                assert_eq!(name, "Math");
                assert_eq!(days, "monday,friday");
            }
            other => panic!("Unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_subject_add_requires_all_fields() {
        let result = Cli::try_parse_from(["stusched", "subject", "add", "--name", "Math"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_week_day() {
        let cli = Cli::try_parse_from(["stusched", "week", "--day", "today"]).unwrap();
        match cli.command {
            Some(Commands::Week { day }) => assert_eq!(day.as_deref(), Some("today")),
            other => panic!("Unexpected parse: {:?}", other),
        }
    }
}

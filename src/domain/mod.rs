//! Domain layer - Schedule model, views and export

pub mod day_view;
pub mod exam;
pub mod export;
pub mod input;
pub mod schedule;
pub mod subject;
pub mod weekday;

pub use day_view::DayGrouping;
pub use exam::{Exam, ExamDraft};
pub use export::{export_schedule, Document, Line, Page, EXPORT_FILENAME};
pub use schedule::Schedule;
pub use subject::{Subject, SubjectDraft};
pub use weekday::{Weekday, WeekdaySet};

//! One-off exams

use serde::{Deserialize, Serialize};

/// A dated exam sitting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub name: String,
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
    pub time: String,
    pub location: String,
}

/// Exam fields collected from the user, before an id is assigned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamDraft {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

impl ExamDraft {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        ExamDraft {
            name: name.into(),
            date: date.into(),
            time: time.into(),
            location: location.into(),
        }
    }

    pub(crate) fn into_exam(self, id: String) -> Exam {
        Exam {
            id,
            name: self.name,
            date: self.date,
            time: self.time,
            location: self.location,
        }
    }
}

//! Weekly recurring subjects

use crate::domain::WeekdaySet;
use serde::{Deserialize, Serialize};

/// A class that meets at the same time on one or more weekdays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub teacher: String,
    /// Zero-padded `HH:MM`, so string order is time order
    pub time: String,
    pub days: WeekdaySet,
}

/// Subject fields collected from the user, before an id is assigned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectDraft {
    pub name: String,
    pub teacher: String,
    pub time: String,
    pub days: WeekdaySet,
}

impl SubjectDraft {
    pub fn new(
        name: impl Into<String>,
        teacher: impl Into<String>,
        time: impl Into<String>,
        days: WeekdaySet,
    ) -> Self {
        SubjectDraft {
            name: name.into(),
            teacher: teacher.into(),
            time: time.into(),
            days,
        }
    }

    pub(crate) fn into_subject(self, id: String) -> Subject {
        Subject {
            id,
            name: self.name,
            teacher: self.teacher,
            time: self.time,
            days: self.days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Weekday;

    #[test]
    fn test_serialized_field_order() {
        let subject = SubjectDraft::new(
            "Physics",
            "Dr. Curie",
            "10:15",
            [Weekday::Tuesday, Weekday::Thursday].into_iter().collect(),
        )
        .into_subject("s1".to_string());

        let json = serde_json::to_string(&subject).unwrap();
        assert_eq!(
            json,
            r#"{"id":"s1","name":"Physics","teacher":"Dr. Curie","time":"10:15","days":["tuesday","thursday"]}"#
        );
    }
}

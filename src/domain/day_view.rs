//! Per-weekday view of the subject list

use crate::domain::{Subject, Weekday};
use std::collections::BTreeMap;

/// Subjects bucketed by weekday, each bucket ordered by time of day.
///
/// Every weekday is a key, including days with no subjects; use
/// [`DayGrouping::non_empty`] for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrouping<'a> {
    buckets: BTreeMap<Weekday, Vec<&'a Subject>>,
}

impl<'a> DayGrouping<'a> {
    /// Build the grouping from subjects in insertion order
    pub fn from_subjects(subjects: &'a [Subject]) -> Self {
        let mut sorted: Vec<&Subject> = subjects.iter().collect();
        // Stable; "HH:MM" is zero-padded so text order is time order
        sorted.sort_by(|a, b| a.time.cmp(&b.time));

        let buckets: BTreeMap<Weekday, Vec<&'a Subject>> = Weekday::ALL
            .into_iter()
            .map(|day| {
                let on_day: Vec<&'a Subject> = sorted
                    .iter()
                    .copied()
                    .filter(|subject| subject.days.contains(day))
                    .collect();
                (day, on_day)
            })
            .collect();

        DayGrouping { buckets }
    }

    /// Subjects meeting on the given day, earliest first
    pub fn for_day(&self, day: Weekday) -> &[&'a Subject] {
        self.buckets.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weekdays with at least one subject, Monday first
    pub fn non_empty(&self) -> impl Iterator<Item = (Weekday, &[&'a Subject])> + '_ {
        self.buckets
            .iter()
            .filter(|(_, subjects)| !subjects.is_empty())
            .map(|(day, subjects)| (*day, subjects.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WeekdaySet;

    fn subject(id: &str, time: &str, days: &[Weekday]) -> Subject {
        Subject {
            id: id.to_string(),
            name: id.to_string(),
            teacher: "T".to_string(),
            time: time.to_string(),
            days: days.iter().copied().collect::<WeekdaySet>(),
        }
    }

    fn ids(subjects: &[&Subject]) -> Vec<String> {
        subjects.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_groups_by_day_sorted_by_time() {
        let subjects = vec![
            subject("A", "09:00", &[Weekday::Monday]),
            subject("B", "08:00", &[Weekday::Monday, Weekday::Wednesday]),
        ];
        let grouping = DayGrouping::from_subjects(&subjects);

        assert_eq!(ids(grouping.for_day(Weekday::Monday)), vec!["B", "A"]);
        assert_eq!(ids(grouping.for_day(Weekday::Wednesday)), vec!["B"]);
        assert!(grouping.for_day(Weekday::Friday).is_empty());

        let days: Vec<Weekday> = grouping.non_empty().map(|(day, _)| day).collect();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Wednesday]);
    }

    #[test]
    fn test_equal_times_keep_insertion_order() {
        let subjects = vec![
            subject("first", "10:00", &[Weekday::Friday]),
            subject("second", "10:00", &[Weekday::Friday]),
            subject("early", "07:45", &[Weekday::Friday]),
        ];
        let grouping = DayGrouping::from_subjects(&subjects);
        assert_eq!(
            ids(grouping.for_day(Weekday::Friday)),
            vec!["early", "first", "second"]
        );
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let subjects = vec![
            subject("A", "13:00", &[Weekday::Tuesday, Weekday::Sunday]),
            subject("B", "08:30", &[Weekday::Sunday]),
        ];
        let first = DayGrouping::from_subjects(&subjects);
        let second = DayGrouping::from_subjects(&subjects);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let grouping = DayGrouping::from_subjects(&[]);
        assert!(grouping.is_empty());
        assert_eq!(grouping.non_empty().count(), 0);
    }

    #[test]
    fn test_subject_without_days_is_not_listed() {
        let subjects = vec![subject("orphan", "09:00", &[])];
        let grouping = DayGrouping::from_subjects(&subjects);
        assert!(grouping.is_empty());
    }
}

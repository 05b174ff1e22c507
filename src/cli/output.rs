//! Output formatting utilities

use crate::domain::{DayGrouping, Exam, Subject, Weekday};

/// Format subjects in insertion order, with ids for removal
pub fn format_subject_list(subjects: &[Subject]) -> String {
    if subjects.is_empty() {
        return "No subjects added yet.".to_string();
    }

    let mut output = String::new();
    for subject in subjects {
        output.push_str(&format!("[{}] {}\n", subject.id, subject.name));
        output.push_str(&format!(
            "    {} - {} at {}\n",
            subject.teacher,
            subject.days.join_tokens(),
            subject.time
        ));
    }
    output
}

/// Format exams in insertion order, with ids for removal
pub fn format_exam_list(exams: &[Exam]) -> String {
    if exams.is_empty() {
        return "No exams added yet.".to_string();
    }

    let mut output = String::new();
    for exam in exams {
        output.push_str(&format!("[{}] {}\n", exam.id, exam.name));
        output.push_str(&format!(
            "    {} at {} - {}\n",
            exam.date, exam.time, exam.location
        ));
    }
    output
}

fn push_day(output: &mut String, day: Weekday, subjects: &[&Subject]) {
    output.push_str(day.display_name());
    output.push('\n');
    for subject in subjects {
        output.push_str(&format!(
            "  {}  {} - {}\n",
            subject.time, subject.name, subject.teacher
        ));
    }
}

/// Format a single weekday's subjects
pub fn format_day(day: Weekday, subjects: &[&Subject]) -> String {
    if subjects.is_empty() {
        return format!("No subjects on {}.", day.display_name());
    }

    let mut output = String::new();
    push_day(&mut output, day, subjects);
    output
}

/// Format the weekly view: non-empty weekdays, then all exams
pub fn format_week(grouping: &DayGrouping<'_>, exams: &[Exam]) -> String {
    let mut output = String::new();

    if grouping.is_empty() {
        output.push_str("No subjects scheduled.\n\n");
    } else {
        for (day, subjects) in grouping.non_empty() {
            push_day(&mut output, day, subjects);
            output.push('\n');
        }
    }

    output.push_str("Exams\n");
    if exams.is_empty() {
        output.push_str("  No exams scheduled.\n");
    }
    for exam in exams {
        output.push_str(&format!(
            "  {}  {} at {} - {}\n",
            exam.name, exam.date, exam.time, exam.location
        ));
    }

    output
}

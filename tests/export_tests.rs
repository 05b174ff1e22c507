//! Integration tests for document export

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{add_exam, add_subject, init_schedule, run_in, stusched_cmd};

#[test]
fn test_export_empty_schedule() {
    let temp = TempDir::new().unwrap();
    init_schedule(temp.path());

    stusched_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("student_schedule.txt"));

    let content = fs::read_to_string(temp.path().join("student_schedule.txt")).unwrap();
    assert_eq!(content, "Student Schedule\n\nSubjects\n\nExams\n");
}

#[test]
fn test_export_contents() {
    let temp = TempDir::new().unwrap();
    init_schedule(temp.path());

    add_subject(temp.path(), "Late", "Mr. Night", "18:00", "wednesday,monday");
    add_subject(temp.path(), "Early", "Ms. Dawn", "07:00", "friday");
    add_exam(temp.path(), "Final", "2025-06-02", "13:30", "Gym");

    run_in(temp.path(), &["export"]);
    let content = fs::read_to_string(temp.path().join("student_schedule.txt")).unwrap();

    let expected = "\
Student Schedule

Subjects

1. Late
   Teacher: Mr. Night
   Days: monday, wednesday
   Time: 18:00

2. Early
   Teacher: Ms. Dawn
   Days: friday
   Time: 07:00

Exams

1. Final
   Date: 2025-06-02
   Time: 13:30
   Location: Gym
";
    assert_eq!(content, expected);
}

#[test]
fn test_export_paginates() {
    let temp = TempDir::new().unwrap();
    init_schedule(temp.path());

    for i in 1..=10 {
        add_subject(temp.path(), &format!("Course {}", i), "T", "09:00", "monday");
    }

    run_in(temp.path(), &["export"]);
    let content = fs::read_to_string(temp.path().join("student_schedule.txt")).unwrap();

    let pages: Vec<&str> = content.split("\u{000C}\n").collect();
    assert_eq!(pages.len(), 2);
    assert!(pages[0].contains("9. Course 9"));
    assert!(!pages[0].contains("10. Course 10"));
    assert!(pages[1].starts_with("10. Course 10\n"));
    assert!(pages[1].contains("Exams"));
}

#[test]
fn test_export_uses_configured_dir() {
    let temp = TempDir::new().unwrap();
    init_schedule(temp.path());
    run_in(temp.path(), &["config", "export_dir", "printouts"]);

    run_in(temp.path(), &["export"]);

    assert!(temp
        .path()
        .join("printouts")
        .join("student_schedule.txt")
        .exists());
}

#[test]
fn test_export_to_explicit_output() {
    let temp = TempDir::new().unwrap();
    init_schedule(temp.path());
    let target = temp.path().join("copy.txt");

    stusched_cmd()
        .current_dir(temp.path())
        .arg("export")
        .arg("--output")
        .arg(&target)
        .assert()
        .success();

    let content = fs::read_to_string(target).unwrap();
    assert!(content.starts_with("Student Schedule"));
}

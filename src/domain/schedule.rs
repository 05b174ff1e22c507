//! Schedule aggregate root
//!
//! Owns the subject and exam lists. Mutations here are purely in-memory;
//! mirroring to storage is done by `application::ScheduleService`.

use crate::domain::{Exam, ExamDraft, Subject, SubjectDraft};
use uuid::Uuid;

/// All subjects and exams of one student, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    subjects: Vec<Subject>,
    exams: Vec<Exam>,
}

impl Schedule {
    pub fn new() -> Self {
        Schedule::default()
    }

    /// Rebuild a schedule from persisted lists, taken verbatim
    pub fn from_parts(subjects: Vec<Subject>, exams: Vec<Exam>) -> Self {
        Schedule { subjects, exams }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty() && self.exams.is_empty()
    }

    pub fn find_subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn find_exam(&self, id: &str) -> Option<&Exam> {
        self.exams.iter().find(|e| e.id == id)
    }

    /// Append a subject built from the draft under a fresh id.
    ///
    /// The draft is consumed; required fields are checked by the caller.
    pub fn add_subject(&mut self, draft: SubjectDraft) -> &Subject {
        let subject = draft.into_subject(generate_id());
        let index = self.subjects.len();
        self.subjects.push(subject);
        &self.subjects[index]
    }

    /// Remove the subject with this id. Returns false if there was none.
    pub fn remove_subject(&mut self, id: &str) -> bool {
        let before = self.subjects.len();
        self.subjects.retain(|s| s.id != id);
        self.subjects.len() != before
    }

    /// Append an exam built from the draft under a fresh id.
    pub fn add_exam(&mut self, draft: ExamDraft) -> &Exam {
        let exam = draft.into_exam(generate_id());
        let index = self.exams.len();
        self.exams.push(exam);
        &self.exams[index]
    }

    /// Remove the exam with this id. Returns false if there was none.
    pub fn remove_exam(&mut self, id: &str) -> bool {
        let before = self.exams.len();
        self.exams.retain(|e| e.id != id);
        self.exams.len() != before
    }

    /// Drop every subject and exam
    pub fn clear(&mut self) {
        self.subjects.clear();
        self.exams.clear();
    }
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

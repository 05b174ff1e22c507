//! Schedule editing use case
//!
//! Owns the in-memory [`Schedule`] and mirrors it to storage after every
//! mutation. Storage failures are logged and otherwise ignored; the in-memory
//! state stays authoritative for the rest of the session.

use crate::domain::{
    export_schedule, DayGrouping, Document, Exam, ExamDraft, Schedule, Subject, SubjectDraft,
};
use crate::infrastructure::{KeyValueStore, LoadStatus, SnapshotStore};

pub struct ScheduleService<S: KeyValueStore> {
    schedule: Schedule,
    snapshots: SnapshotStore<S>,
    load_status: LoadStatus,
}

impl<S: KeyValueStore> ScheduleService<S> {
    /// Hydrate from the store; anything unusable there means an empty schedule
    pub fn open(store: S) -> Self {
        let mut snapshots = SnapshotStore::new(store);
        let (schedule, load_status) = snapshots.load();
        ScheduleService {
            schedule,
            snapshots,
            load_status,
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// How the stored snapshot looked at startup
    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    pub fn snapshots(&self) -> &SnapshotStore<S> {
        &self.snapshots
    }

    pub fn add_subject(&mut self, draft: SubjectDraft) -> Subject {
        let subject = self.schedule.add_subject(draft).clone();
        log::info!("Added subject {} ({})", subject.name, subject.id);
        self.persist();
        subject
    }

    /// Remove a subject; returns false when the id is unknown
    pub fn remove_subject(&mut self, id: &str) -> bool {
        let removed = self.schedule.remove_subject(id);
        self.persist();
        removed
    }

    pub fn add_exam(&mut self, draft: ExamDraft) -> Exam {
        let exam = self.schedule.add_exam(draft).clone();
        log::info!("Added exam {} ({})", exam.name, exam.id);
        self.persist();
        exam
    }

    /// Remove an exam; returns false when the id is unknown
    pub fn remove_exam(&mut self, id: &str) -> bool {
        let removed = self.schedule.remove_exam(id);
        self.persist();
        removed
    }

    pub fn clear(&mut self) {
        self.schedule.clear();
        self.persist();
    }

    pub fn day_grouping(&self) -> DayGrouping<'_> {
        DayGrouping::from_subjects(self.schedule.subjects())
    }

    pub fn export(&self) -> Document {
        export_schedule(&self.schedule)
    }

    fn persist(&mut self) {
        if let Err(e) = self.snapshots.save(&self.schedule) {
            log::warn!("Failed to save schedule: {}", e);
        }
    }
}

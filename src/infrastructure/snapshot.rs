//! Schedule snapshots with a fixed retention window
//!
//! The whole schedule is written under a single key as
//! `{"subjects":[...],"exams":[...],"savedAt":<epoch-ms>}`. Loading never
//! fails: a missing, unreadable, malformed or expired snapshot all yield an
//! empty schedule.

use crate::domain::{Exam, Schedule, Subject};
use crate::error::Result;
use crate::infrastructure::storage::KeyValueStore;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Key the snapshot is stored under
pub const STORAGE_KEY: &str = "studentScheduleData";

/// Snapshots at least this old are discarded on load (180 days)
pub const RETENTION_WINDOW_MS: i64 = 6 * 30 * 24 * 60 * 60 * 1000;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    subjects: &'a [Subject],
    exams: &'a [Exam],
    #[serde(rename = "savedAt")]
    saved_at: i64,
}

#[derive(Deserialize)]
struct Snapshot {
    subjects: Vec<Subject>,
    exams: Vec<Exam>,
    // Older records used `timestamp`
    #[serde(rename = "savedAt", alias = "timestamp")]
    saved_at: i64,
}

/// Outcome of reading the stored snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Missing,
    Loaded,
    Expired,
    Corrupt,
}

/// Mirrors a [`Schedule`] into a key-value store
#[derive(Debug)]
pub struct SnapshotStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    pub fn new(store: S) -> Self {
        SnapshotStore { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Save with the current wall-clock time
    pub fn save(&mut self, schedule: &Schedule) -> Result<()> {
        self.save_at(schedule, Utc::now().timestamp_millis())
    }

    /// Serialize the schedule stamped with `now_ms`, overwriting any previous
    /// snapshot
    pub fn save_at(&mut self, schedule: &Schedule, now_ms: i64) -> Result<()> {
        let snapshot = SnapshotRef {
            subjects: schedule.subjects(),
            exams: schedule.exams(),
            saved_at: now_ms,
        };
        let json = serde_json::to_string(&snapshot)?;
        self.store.set(STORAGE_KEY, &json)?;

        log::debug!(
            "Saved snapshot ({} subjects, {} exams)",
            schedule.subjects().len(),
            schedule.exams().len()
        );
        Ok(())
    }

    /// Load relative to the current wall-clock time
    pub fn load(&mut self) -> (Schedule, LoadStatus) {
        self.load_at(Utc::now().timestamp_millis())
    }

    /// Load the stored schedule as of `now_ms`.
    ///
    /// Expired snapshots are deleted from the store. Corrupt ones are left in
    /// place; the next save overwrites them.
    pub fn load_at(&mut self, now_ms: i64) -> (Schedule, LoadStatus) {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (Schedule::new(), LoadStatus::Missing),
            Err(e) => {
                log::warn!("Could not read stored schedule, starting empty: {}", e);
                return (Schedule::new(), LoadStatus::Corrupt);
            }
        };

        let snapshot: Snapshot = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("Ignoring malformed stored schedule: {}", e);
                return (Schedule::new(), LoadStatus::Corrupt);
            }
        };

        if now_ms.saturating_sub(snapshot.saved_at) >= RETENTION_WINDOW_MS {
            log::info!("Stored schedule is older than the retention window, discarding");
            if let Err(e) = self.store.remove(STORAGE_KEY) {
                log::warn!("Could not delete expired schedule: {}", e);
            }
            return (Schedule::new(), LoadStatus::Expired);
        }

        log::debug!(
            "Loaded snapshot ({} subjects, {} exams)",
            snapshot.subjects.len(),
            snapshot.exams.len()
        );
        (
            Schedule::from_parts(snapshot.subjects, snapshot.exams),
            LoadStatus::Loaded,
        )
    }
}

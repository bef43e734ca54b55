//! Job record and its serializable snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::JobId;
use super::progress::Progress;
use super::state::JobPhase;

/// Job record: the single source of truth for one job.
///
/// Design:
/// - Mutation happens only through [`JobRecord::advance`]; readers get
///   copies or [`JobSnapshot`] views.
/// - Timestamps come from the caller so the same record logic works with
///   the system clock and with a fixed test clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub id: JobId,
    pub progress: Progress,

    /// Timestamps for observability.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Set exactly once, when progress first reaches 100.
    pub completed_at: Option<DateTime<Utc>>,
}

impl JobRecord {
    /// New record at progress 0.
    pub fn new(id: JobId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            progress: Progress::ZERO,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Apply one advancement step and return the resulting progress.
    ///
    /// Progress is monotone: once 100 is reached the record is frozen and
    /// further calls change nothing, timestamps included.
    pub fn advance(&mut self, step: u8, now: DateTime<Utc>) -> Progress {
        if self.progress.is_complete() {
            return self.progress;
        }

        self.progress = self.progress.advanced_by(step);
        self.updated_at = now;
        if self.progress.is_complete() {
            self.completed_at = Some(now);
        }
        self.progress
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> JobPhase {
        JobPhase::of(self.progress)
    }
}

/// Serializable view of a [`JobRecord`] for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub id: JobId,
    pub progress: Progress,
    pub phase: JobPhase,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<&JobRecord> for JobSnapshot {
    fn from(record: &JobRecord) -> Self {
        Self {
            id: record.id,
            progress: record.progress,
            phase: record.phase(),
            created_at: record.created_at,
            updated_at: record.updated_at,
            completed_at: record.completed_at,
        }
    }
}

//! Job lifecycle phases.

use serde::{Deserialize, Serialize};

use super::progress::Progress;

/// Phase of a job, derived from its progress.
///
/// The lifecycle is linear: `Pending -> Complete`. There is no failure
/// phase; every submitted job eventually reaches 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobPhase {
    /// Progress is below 100 and the advancer is still running.
    Pending,

    /// Progress reached 100. Terminal.
    Complete,
}

impl JobPhase {
    /// Derive the phase from a progress value.
    pub fn of(progress: Progress) -> Self {
        if progress.is_complete() {
            JobPhase::Complete
        } else {
            JobPhase::Pending
        }
    }

    /// Whether this phase admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobPhase::Complete)
    }
}

//! Domain events describing the life of a job.

use chrono::{DateTime, Utc};

use super::ids::JobId;
use super::progress::Progress;

/// Events emitted by the store as jobs move through their lifecycle.
///
/// Events are observational: consumers (logging, metrics) must not feed
/// back into store state. Per job, events arrive in lifecycle order:
/// `Submitted`, then zero or more `Advanced`, then `Completed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobEvent {
    /// A job was accepted and registered at progress 0.
    Submitted { id: JobId, at: DateTime<Utc> },

    /// One advancement step was applied.
    Advanced {
        id: JobId,
        progress: Progress,
        at: DateTime<Utc>,
    },

    /// Progress reached 100.
    Completed { id: JobId, at: DateTime<Utc> },
}

impl JobEvent {
    /// The job this event belongs to.
    pub fn job_id(&self) -> JobId {
        match self {
            JobEvent::Submitted { id, .. }
            | JobEvent::Advanced { id, .. }
            | JobEvent::Completed { id, .. } => *id,
        }
    }
}

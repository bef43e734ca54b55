//! Error types for store and observer operations.

use std::time::Duration;

use thiserror::Error;

use super::ids::JobId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeadwayError {
    /// The id was well-formed but no job with it was ever submitted.
    #[error("unknown job id: {0}")]
    JobNotFound(JobId),

    /// A bounded wait for completion expired before progress reached 100.
    ///
    /// The job itself is unaffected: it keeps advancing and can be
    /// awaited again.
    #[error("wait for job {id} timed out after {waited:?}")]
    WaitTimeout { id: JobId, waited: Duration },
}

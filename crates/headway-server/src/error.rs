//! API error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use headway_core::domain::{HeadwayError, JobId};

/// Body returned for requests whose job id is missing, malformed, or
/// unknown. Clients match on this exact text.
pub const INVALID_JOB_ID_BODY: &str = "Invalid or unknown jobId\n";

/// Body returned when a long-poll wait expires.
pub const WAIT_TIMEOUT_BODY: &str = "Timed out waiting for job completion\n";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The `jobId` query parameter was absent, empty, or not a job id.
    #[error("missing or malformed jobId parameter")]
    InvalidJobId,

    /// The id parsed fine but no such job was ever submitted.
    #[error("unknown job id: {0}")]
    JobNotFound(JobId),

    /// The long-poll deadline expired before the job completed.
    #[error("timed out waiting for job {0}")]
    WaitTimeout(JobId),
}

impl From<HeadwayError> for ApiError {
    fn from(err: HeadwayError) -> Self {
        match err {
            HeadwayError::JobNotFound(id) => ApiError::JobNotFound(id),
            HeadwayError::WaitTimeout { id, .. } => ApiError::WaitTimeout(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidJobId => {
                tracing::warn!("request rejected: missing or malformed jobId");
                (StatusCode::BAD_REQUEST, INVALID_JOB_ID_BODY)
            }
            ApiError::JobNotFound(id) => {
                tracing::warn!(job_id = %id, "request for unknown job");
                (StatusCode::NOT_FOUND, INVALID_JOB_ID_BODY)
            }
            ApiError::WaitTimeout(id) => {
                tracing::warn!(job_id = %id, "long-poll wait timed out");
                (StatusCode::REQUEST_TIMEOUT, WAIT_TIMEOUT_BODY)
            }
        };
        (status, body).into_response()
    }
}

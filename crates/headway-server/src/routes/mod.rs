//! Route definitions.

pub mod health;
pub mod jobs;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// POST   /submit           submit a job, body is the new job id
/// GET    /checkStatus      immediate progress report
/// GET    /awaitCompletion  long poll until the job completes
/// GET    /health           service status and job counts
/// ```
pub fn router() -> Router<AppState> {
    Router::new().merge(jobs::router()).merge(health::router())
}

//! Job submission and status endpoints.
//!
//! The bodies are plain text, with a fixed shape clients match on:
//! submit returns the bare job id, and the status endpoints embed the
//! literal progress number in a `JobStatus:` banner.

use axum::Router;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use serde::Deserialize;

use headway_core::domain::JobId;

use crate::error::ApiError;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST   /submit           -> submit_job
/// GET    /checkStatus      -> check_status
/// GET    /awaitCompletion  -> await_completion
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit", post(submit_job))
        .route("/checkStatus", get(check_status))
        .route("/awaitCompletion", get(await_completion))
}

/// Query parameter shared by the status endpoints.
#[derive(Debug, Deserialize)]
struct JobIdParam {
    #[serde(rename = "jobId")]
    job_id: Option<String>,
}

fn parse_job_id(param: Option<String>) -> Result<JobId, ApiError> {
    let raw = param
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::InvalidJobId)?;
    raw.parse().map_err(|_| ApiError::InvalidJobId)
}

/// POST /submit -- register a new job and return its id as the body.
async fn submit_job(State(state): State<AppState>) -> String {
    let id = state.store.submit().await;
    id.to_string()
}

/// GET /checkStatus?jobId=... -- report current progress immediately.
async fn check_status(
    State(state): State<AppState>,
    Query(params): Query<JobIdParam>,
) -> Result<String, ApiError> {
    let id = parse_job_id(params.job_id)?;
    let progress = state.observer.peek_status(id).await?;

    tracing::info!(job_id = %id, progress = %progress, "status check");
    Ok(format!("\nJobStatus: {progress}%\n\n"))
}

/// GET /awaitCompletion?jobId=... -- long poll until progress reaches 100.
///
/// Holds the request open, suspended, until the job completes or the
/// configured wait deadline expires (408).
async fn await_completion(
    State(state): State<AppState>,
    Query(params): Query<JobIdParam>,
) -> Result<String, ApiError> {
    let id = parse_job_id(params.job_id)?;
    let progress = state
        .observer
        .await_completion_within(id, state.config.wait_timeout())
        .await?;

    tracing::info!(job_id = %id, "long poll answered");
    Ok(format!("\n\nJobStatus:Complete  {progress}%\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::error::INVALID_JOB_ID_BODY;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use headway_core::store::{AdvancePolicy, JobStore};
    use std::time::Duration;
    use tower::ServiceExt;

    fn fast_policy() -> AdvancePolicy {
        AdvancePolicy {
            step_percent: 25,
            step_interval: Duration::from_millis(5),
        }
    }

    fn frozen_policy() -> AdvancePolicy {
        AdvancePolicy {
            step_percent: 10,
            step_interval: Duration::from_secs(3600),
        }
    }

    fn test_app(policy: AdvancePolicy, config: ServerConfig) -> (AppState, Router) {
        let state = AppState::new(JobStore::new(policy), config);
        let app = router().with_state(state.clone());
        (state, app)
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn submit_returns_a_parseable_job_id() {
        let (_, app) = test_app(frozen_policy(), ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/submit")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.parse::<JobId>().is_ok(), "unparseable id: {body:?}");
    }

    #[tokio::test]
    async fn check_status_reports_the_literal_progress() {
        let (state, app) = test_app(frozen_policy(), ServerConfig::default());
        let id = state.store.submit().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/checkStatus?jobId={id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body_text(response).await, "\nJobStatus: 0%\n\n");
    }

    #[tokio::test]
    async fn check_status_without_an_id_is_bad_request() {
        let (_, app) = test_app(frozen_policy(), ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/checkStatus")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, INVALID_JOB_ID_BODY);
    }

    #[tokio::test]
    async fn check_status_with_a_malformed_id_is_bad_request() {
        let (_, app) = test_app(frozen_policy(), ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/checkStatus?jobId=not-a-job-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn check_status_with_an_unknown_id_is_not_found() {
        let (_, app) = test_app(frozen_policy(), ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/checkStatus?jobId=job-01ARZ3NDEKTSV4RRFFQ69G5FAV")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, INVALID_JOB_ID_BODY);
    }

    #[tokio::test]
    async fn await_completion_returns_the_complete_banner() {
        let (state, app) = test_app(fast_policy(), ServerConfig::default());
        let id = state.store.submit().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/awaitCompletion?jobId={id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "\n\nJobStatus:Complete  100%\n\n");
    }

    #[tokio::test]
    async fn await_completion_times_out_on_a_stuck_job() {
        let config = ServerConfig {
            wait_timeout_secs: 1,
            ..ServerConfig::default()
        };
        let (state, app) = test_app(frozen_policy(), config);
        let id = state.store.submit().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/awaitCompletion?jobId={id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn await_completion_with_an_unknown_id_is_not_found() {
        let (_, app) = test_app(frozen_policy(), ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/awaitCompletion?jobId=job-01ARZ3NDEKTSV4RRFFQ69G5FAV")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, INVALID_JOB_ID_BODY);
    }

    #[tokio::test]
    async fn submit_then_check_status_end_to_end() {
        let (_, app) = test_app(frozen_policy(), ServerConfig::default());

        let submit_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/submit")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let id = body_text(submit_response).await;

        let status_response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/checkStatus?jobId={id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(status_response.status(), StatusCode::OK);
        assert!(body_text(status_response).await.contains("JobStatus: 0%"));
    }
}

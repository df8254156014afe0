//! HTTP handlers

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use super::state::AppState;
use super::types::{ApiError, ErrorBody, ScheduleRequest, ValidatedSchedule};
use crate::scheduling::ScheduledTransfer;

/// Build revision embedded by build.rs
pub const VERSION: &str = env!("GIT_HASH");

/// Schedule a transfer
///
/// Validates the body, prices it against the advance-notice fee table
/// and stores it.
#[utoipa::path(
    post,
    path = "/api/schedules",
    request_body = ScheduleRequest,
    responses(
        (status = 201, description = "Transfer scheduled", body = ScheduledTransfer, content_type = "application/json"),
        (status = 400, description = "Validation failed or no fee tier applies", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tag = "Scheduling"
)]
pub async fn create_schedule(
    State(state): State<Arc<AppState>>,
    ValidatedSchedule { order, today }: ValidatedSchedule,
) -> Result<(StatusCode, Json<ScheduledTransfer>), ApiError> {
    let stored = state.scheduling.schedule_on(order, today).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// List scheduled transfers
///
/// Returns every stored transfer in repository order.
#[utoipa::path(
    get,
    path = "/api/schedules",
    responses(
        (status = 200, description = "All scheduled transfers", body = Vec<ScheduledTransfer>, content_type = "application/json"),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tag = "Scheduling"
)]
pub async fn list_schedules(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ScheduledTransfer>>, ApiError> {
    let all = state.scheduling.list_all().await?;
    Ok(Json(all))
}

/// Health check response data
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "UP")]
    pub status: String,
    /// Git revision of the running build
    #[schema(example = "a1b2c3d")]
    pub version: String,
}

/// Health check endpoint
///
/// - Healthy: 200 OK + `{status: "UP", version}`
/// - Repository unreachable: 503 + `{status: "DOWN", version}`
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json"),
        (status = 503, description = "Service unavailable", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    match state.scheduling.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "UP".to_string(),
                version: VERSION.to_string(),
            }),
        ),
        Err(e) => {
            tracing::error!("[HEALTH] Repository ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "DOWN".to_string(),
                    version: VERSION.to_string(),
                }),
            )
        }
    }
}

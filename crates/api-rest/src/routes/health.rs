//! Health check endpoints.

use crate::{responses::ApiResponse, state::AppState};
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A two-row recording the readiness probe runs through the pipeline.
const PROBE_RECORDING: &str = "elapsedTime(seconds),x,y\n0.000,0.0,0.0\n0.016,1.0,1.0\n";

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

/// Readiness check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    /// Overall readiness status
    pub ready: bool,

    /// Individual component checks
    pub checks: ReadinessChecks,
}

/// Individual readiness checks
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadinessChecks {
    /// The analysis pipeline completes a probe recording
    pub analyzer: bool,
}

/// Health check routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
}

/// Basic health check
///
/// Returns service status and version information.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
async fn health() -> Json<ApiResponse<HealthResponse>> {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Json(ApiResponse::success(response))
}

/// Readiness check
///
/// Runs a probe recording through the analysis pipeline.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service readiness status", body = ReadinessResponse)
    )
)]
async fn ready(State(state): State<AppState>) -> Json<ApiResponse<ReadinessResponse>> {
    let checks = ReadinessChecks {
        analyzer: state.analyzer.analyze(PROBE_RECORDING).is_completed(),
    };

    let response = ReadinessResponse {
        ready: checks.analyzer,
        checks,
    };

    Json(ApiResponse::success(response))
}

//! Gaze analysis endpoint.

use crate::{extractors::ValidatedJson, state::AppState};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use gaze_insight_domain::{AnalysisFailure, AnalysisOutcome, AnalysisReport};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Analyze request envelope carrying the raw recording.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AnalyzeRequest {
    /// Gaze samples in delimited-tabular form with a header row naming
    /// `elapsedTime(seconds)`, `x`, and `y`
    #[validate(length(min = 1, message = "recording must not be empty"))]
    pub data: String,
}

/// Completed analysis body
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalysisBody {
    /// Attention score in [1, 100]
    pub score: i64,
    /// Derived statistics
    pub analysis: SummaryBody,
    /// Completion message with the attention grade
    pub message: String,
}

/// Derived statistics body
#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryBody {
    /// Number of samples analyzed
    pub total_points: usize,
    /// Recording duration in seconds
    pub duration_seconds: f64,
    /// Mean per-step movement distance
    pub average_movement: f64,
    /// Total movement distance
    pub total_movement: f64,
    /// Gaze speed stability
    pub stability_score: f64,
    /// Bounding-box area covered by the gaze
    pub coverage_area: f64,
}

/// Failed analysis body; `score` is always 0
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalysisFailureBody {
    /// Always 0
    pub score: i64,
    /// Description of what went wrong
    pub error: String,
    /// Always "Analysis failed"
    pub message: String,
}

impl From<AnalysisReport> for AnalysisBody {
    fn from(report: AnalysisReport) -> Self {
        Self {
            score: report.score,
            analysis: SummaryBody {
                total_points: report.analysis.total_points,
                duration_seconds: report.analysis.duration_seconds,
                average_movement: report.analysis.average_movement,
                total_movement: report.analysis.total_movement,
                stability_score: report.analysis.stability_score,
                coverage_area: report.analysis.coverage_area,
            },
            message: report.message,
        }
    }
}

impl From<AnalysisFailure> for AnalysisFailureBody {
    fn from(failure: AnalysisFailure) -> Self {
        Self {
            score: failure.score,
            error: failure.error,
            message: failure.message,
        }
    }
}

/// Analysis routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze))
}

/// Analyze a gaze recording
///
/// Always answers HTTP 200 with either the completed report or the failure
/// payload; analysis failures are data, not transport errors.
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis outcome", body = AnalysisBody),
        (status = 400, description = "Malformed request envelope"),
    )
)]
async fn analyze(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<AnalyzeRequest>,
) -> Response {
    match state.analyzer.analyze(&req.data) {
        AnalysisOutcome::Completed(report) => Json(AnalysisBody::from(report)).into_response(),
        AnalysisOutcome::Failed(failure) => {
            Json(AnalysisFailureBody::from(failure)).into_response()
        }
    }
}

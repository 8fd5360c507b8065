//! The analysis pipeline orchestrator.

use gaze_insight_domain::{
    AnalysisError, AnalysisOutcome, AnalysisReport, RawStatistics, SampleSeries,
};
use tracing::{debug, info, instrument, warn};

use crate::{parser, scoring, statistics};

/// Stateless orchestrator for the analysis pipeline.
///
/// Sequences parse → statistics → score → label behind a single failure
/// boundary: any error from any stage becomes the failure payload, never a
/// propagated error. Each call is independent; the service holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisService;

impl AnalysisService {
    /// Create the service.
    pub fn new() -> Self {
        Self
    }

    /// Analyze a raw gaze recording.
    ///
    /// Always returns a well-formed outcome; analysis failures are reported
    /// in the payload with `score` 0 and the triggering error's description.
    #[instrument(skip(self, input), fields(input_bytes = input.len()))]
    pub fn analyze(&self, input: &str) -> AnalysisOutcome {
        match self.try_analyze(input) {
            Ok(report) => {
                info!(
                    score = report.score,
                    total_points = report.analysis.total_points,
                    "analysis completed"
                );
                AnalysisOutcome::Completed(report)
            }
            Err(err) => {
                warn!(code = err.error_code(), error = %err, "analysis failed");
                AnalysisOutcome::from(err)
            }
        }
    }

    fn try_analyze(&self, input: &str) -> Result<AnalysisReport, AnalysisError> {
        let series = parser::parse_gaze_csv(input)?;
        let stats = self.derive(&series)?;
        let score = scoring::final_score(&stats);
        Ok(AnalysisReport::new(score, stats.summary()))
    }

    fn derive(&self, series: &SampleSeries) -> Result<RawStatistics, AnalysisError> {
        let stats = statistics::compute_statistics(series)?;
        debug!(
            total_points = stats.total_points,
            duration_seconds = stats.duration_seconds,
            average_movement = stats.average_movement,
            stability = stats.stability,
            "statistics derived"
        );
        Ok(stats)
    }
}

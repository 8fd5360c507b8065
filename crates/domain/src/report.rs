//! Analysis result payloads.
//!
//! The pipeline produces exactly one of two shapes: a completed report with
//! the clamped integer score, the rounded statistics, and a grade message,
//! or a failure payload with `score` pinned to 0 and the triggering error's
//! description. Both serialize to the wire contract of the analyze endpoint.

use crate::errors::AnalysisError;
use crate::grade::AttentionGrade;
use crate::statistics::AnalysisSummary;
use serde::{Deserialize, Serialize};

/// Payload of a completed analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Attention score, an integer clamped to [1, 100]
    pub score: i64,
    /// Rounded descriptive statistics
    pub analysis: AnalysisSummary,
    /// `"Analysis completed: <grade description>"`
    pub message: String,
}

impl AnalysisReport {
    /// Assemble a report, deriving the grade message from the score.
    pub fn new(score: i64, analysis: AnalysisSummary) -> Self {
        let grade = AttentionGrade::from_score(score);
        Self {
            score,
            analysis,
            message: format!("Analysis completed: {}", grade.description()),
        }
    }

    /// The grade bucket this report's score falls in.
    pub fn grade(&self) -> AttentionGrade {
        AttentionGrade::from_score(self.score)
    }
}

/// Payload of a failed analysis. `score` is always 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    /// Always 0 for failures
    pub score: i64,
    /// Description of the triggering error
    pub error: String,
    /// Always `"Analysis failed"`
    pub message: String,
}

impl AnalysisFailure {
    /// Build the failure payload for a pipeline error.
    pub fn from_error(error: &AnalysisError) -> Self {
        Self {
            score: 0,
            error: error.to_string(),
            message: "Analysis failed".to_string(),
        }
    }
}

/// The single output of the analysis pipeline.
///
/// Serializes untagged: callers see either the report shape or the failure
/// shape, never a wrapper. The two shapes are disjoint (`analysis` vs.
/// `error`), so deserialization is unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    /// Analysis ran to completion
    Completed(AnalysisReport),
    /// Some pipeline stage failed
    Failed(AnalysisFailure),
}

impl AnalysisOutcome {
    /// The reported score: in [1, 100] when completed, 0 when failed.
    pub fn score(&self) -> i64 {
        match self {
            Self::Completed(report) => report.score,
            Self::Failed(failure) => failure.score,
        }
    }

    /// Whether the analysis ran to completion.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

impl From<AnalysisError> for AnalysisOutcome {
    fn from(error: AnalysisError) -> Self {
        Self::Failed(AnalysisFailure::from_error(&error))
    }
}

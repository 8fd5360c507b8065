//! Derived statistics for a gaze recording.
//!
//! `RawStatistics` carries the full-precision quantities used by the score
//! calculator; `AnalysisSummary` is the rounded presentation form that goes
//! out on the wire. Rounding is applied once, at the raw → summary boundary.

use serde::{Deserialize, Serialize};

/// Full-precision statistics derived from a sample series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawStatistics {
    /// Number of samples in the series
    pub total_points: usize,
    /// `max(elapsed) - min(elapsed)` over all samples, in seconds
    pub duration_seconds: f64,
    /// Mean per-step Euclidean distance; 0 with fewer than 2 samples
    pub average_movement: f64,
    /// Sum of per-step Euclidean distances; 0 with fewer than 2 samples
    pub total_movement: f64,
    /// Inverse measure of speed variance, capped at 100
    pub stability: f64,
    /// Bounding-box area spanned by the sampled coordinates
    pub coverage_area: f64,
}

impl RawStatistics {
    /// Presentation form with floats rounded to two decimal places.
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            total_points: self.total_points,
            duration_seconds: round2(self.duration_seconds),
            average_movement: round2(self.average_movement),
            total_movement: round2(self.total_movement),
            stability_score: round2(self.stability),
            coverage_area: round2(self.coverage_area),
        }
    }
}

/// Rounded statistics as reported to callers.
///
/// Field names are the wire contract of the analyze endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Number of samples in the series
    pub total_points: usize,
    /// Recording duration in seconds
    pub duration_seconds: f64,
    /// Mean per-step movement distance
    pub average_movement: f64,
    /// Total movement distance across the recording
    pub total_movement: f64,
    /// Stability of gaze speed across the recording
    pub stability_score: f64,
    /// Bounding-box area covered by the gaze
    pub coverage_area: f64,
}

/// Round to two decimal places for presentation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(14.7825), 14.78);
        assert_eq!(round2(-2.346), -2.35);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_summary_rounds_floats_only() {
        let raw = RawStatistics {
            total_points: 5,
            duration_seconds: 0.064,
            average_movement: 1.36423861,
            total_movement: 5.45695443,
            stability: 0.0,
            coverage_area: 14.7825,
        };

        let summary = raw.summary();
        assert_eq!(summary.total_points, 5);
        assert_eq!(summary.duration_seconds, 0.06);
        assert_eq!(summary.average_movement, 1.36);
        assert_eq!(summary.total_movement, 5.46);
        assert_eq!(summary.stability_score, 0.0);
        assert_eq!(summary.coverage_area, 14.78);
    }

    #[test]
    fn test_summary_serializes_contract_field_names() {
        let summary = AnalysisSummary {
            total_points: 2,
            duration_seconds: 0.02,
            average_movement: 1.0,
            total_movement: 1.0,
            stability_score: 50.0,
            coverage_area: 1.0,
        };

        let json = serde_json::to_value(&summary).unwrap();
        for key in [
            "total_points",
            "duration_seconds",
            "average_movement",
            "total_movement",
            "stability_score",
            "coverage_area",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}

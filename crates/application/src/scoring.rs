//! Attention score calculation.
//!
//! A fixed piecewise-linear formula over the raw statistics: a base of 50
//! plus four independent sub-scores (duration, stability, sample quality,
//! movement range), clamped to [1, 100]. Coverage area is carried in the
//! statistics but does not contribute a sub-score. Pure functions, no error
//! conditions.

use gaze_insight_domain::RawStatistics;

const BASE_SCORE: f64 = 50.0;

/// Attention score as a clamped float in [1, 100].
pub fn attention_score(stats: &RawStatistics) -> f64 {
    let total = BASE_SCORE
        + duration_score(stats.duration_seconds)
        + stability_score(stats.stability)
        + quality_score(stats.total_points)
        + movement_score(stats.average_movement);

    total.clamp(1.0, 100.0)
}

/// Final integer score: the clamped float truncated toward zero.
pub fn final_score(stats: &RawStatistics) -> i64 {
    attention_score(stats) as i64
}

/// 25 for the 10–30s sweet spot; linear ramp below, capped falloff above.
fn duration_score(duration: f64) -> f64 {
    if (10.0..=30.0).contains(&duration) {
        25.0
    } else if duration > 30.0 {
        25.0 - ((duration - 30.0) * 0.5).min(15.0)
    } else {
        duration * 2.5
    }
}

/// Stability contributes up to 20 points. Inputs may be very negative and
/// are deliberately not clamped before scaling.
fn stability_score(stability: f64) -> f64 {
    (stability * 0.3).min(20.0)
}

/// Sample-count quality, saturating at 15 points for 100+ samples.
fn quality_score(points: usize) -> f64 {
    (points as f64 / 100.0).min(1.0) * 15.0
}

/// 10 for average movement in the 50–200 range; triangular falloff centered
/// at 125 outside it, floored at 0.
fn movement_score(avg_movement: f64) -> f64 {
    if (50.0..=200.0).contains(&avg_movement) {
        10.0
    } else {
        (10.0 - (avg_movement - 125.0).abs() * 0.05).max(0.0)
    }
}

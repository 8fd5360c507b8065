//! Statistics extraction over a sample series.
//!
//! Duration and coverage are computed over extrema rather than first/last
//! samples, since input timestamps are not guaranteed sorted. Stability is
//! an inverse measure of per-step speed variance; the standard deviation is
//! the population form (ddof = 0).

use gaze_insight_domain::{ComputationError, RawStatistics, SampleSeries};

/// Neutral stability assigned when fewer than two movement steps exist.
const NEUTRAL_STABILITY: f64 = 50.0;

/// Derive the raw statistics for a series.
///
/// Requires at least one sample. A zero elapsed-time delta between
/// consecutive samples makes the step speed non-finite and fails the
/// computation; the pipeline boundary reports it as the failure payload.
pub fn compute_statistics(series: &SampleSeries) -> Result<RawStatistics, ComputationError> {
    let samples = series.samples();
    if samples.is_empty() {
        return Err(ComputationError::EmptySeries);
    }

    let total_points = samples.len();

    let (min_t, max_t) = extrema(samples.iter().map(|s| s.elapsed_seconds));
    let (min_x, max_x) = extrema(samples.iter().map(|s| s.x));
    let (min_y, max_y) = extrema(samples.iter().map(|s| s.y));

    let duration_seconds = max_t - min_t;
    let coverage_area = (max_x - min_x) * (max_y - min_y);

    let distances: Vec<f64> = samples
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .collect();
    let total_movement: f64 = distances.iter().sum();
    let average_movement = if distances.is_empty() {
        0.0
    } else {
        total_movement / distances.len() as f64
    };

    let stability = if distances.len() > 1 {
        let speeds = step_speeds(series, &distances)?;
        let spread = population_std_dev(&speeds);
        100.0 - (spread * 10.0).min(100.0)
    } else {
        NEUTRAL_STABILITY
    };

    let stats = RawStatistics {
        total_points,
        duration_seconds,
        average_movement,
        total_movement,
        stability,
        coverage_area,
    };
    ensure_scorable(&stats)?;

    Ok(stats)
}

/// Minimum and maximum of a non-empty stream of values.
fn extrema(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}

/// Per-step speeds: distance divided by the corresponding time delta.
fn step_speeds(series: &SampleSeries, distances: &[f64]) -> Result<Vec<f64>, ComputationError> {
    let samples = series.samples();
    let mut speeds = Vec::with_capacity(distances.len());

    for (step, pair) in samples.windows(2).enumerate() {
        let dt = pair[0].time_delta_to(&pair[1]);
        let speed = distances[step] / dt;
        if !speed.is_finite() {
            return Err(ComputationError::NonFiniteSpeed { step: step + 1 });
        }
        speeds.push(speed);
    }

    Ok(speeds)
}

/// Population standard deviation (ddof = 0).
fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}

/// NaN statistics cannot be bucketed into a score; reject them here instead
/// of letting the score calculator emit a meaningless result.
fn ensure_scorable(stats: &RawStatistics) -> Result<(), ComputationError> {
    let checks = [
        ("duration_seconds", stats.duration_seconds),
        ("average_movement", stats.average_movement),
        ("total_movement", stats.total_movement),
        ("stability", stats.stability),
        ("coverage_area", stats.coverage_area),
    ];

    for (quantity, value) in checks {
        if value.is_nan() {
            return Err(ComputationError::NonFiniteResult { quantity });
        }
    }

    Ok(())
}

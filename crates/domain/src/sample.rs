//! Gaze observations and the ordered sample series.

use serde::{Deserialize, Serialize};

/// One gaze observation: elapsed recording time plus screen coordinates.
///
/// A sample has no identity beyond its position in the series it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GazeSample {
    /// Seconds elapsed since the start of the recording
    pub elapsed_seconds: f64,
    /// Horizontal gaze coordinate
    pub x: f64,
    /// Vertical gaze coordinate
    pub y: f64,
}

impl GazeSample {
    /// Create a new sample.
    pub fn new(elapsed_seconds: f64, x: f64, y: f64) -> Self {
        Self {
            elapsed_seconds,
            x,
            y,
        }
    }

    /// Euclidean distance between this sample's coordinates and another's.
    pub fn distance_to(&self, other: &GazeSample) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Elapsed-time delta from this sample to another.
    pub fn time_delta_to(&self, other: &GazeSample) -> f64 {
        other.elapsed_seconds - self.elapsed_seconds
    }
}

/// An ordered series of gaze samples.
///
/// Insertion order is temporal order as parsed from the input; the series is
/// never reordered. Timestamps are not required to be sorted, which is why
/// duration and coverage statistics are computed over extrema rather than
/// first/last elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSeries {
    samples: Vec<GazeSample>,
}

impl SampleSeries {
    /// Create a series from already-ordered samples.
    pub fn new(samples: Vec<GazeSample>) -> Self {
        Self { samples }
    }

    /// Number of samples in the series.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series contains no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples in temporal order.
    pub fn samples(&self) -> &[GazeSample] {
        &self.samples
    }

    /// Iterate over the samples in temporal order.
    pub fn iter(&self) -> std::slice::Iter<'_, GazeSample> {
        self.samples.iter()
    }

    /// Append a sample, preserving insertion order.
    pub fn push(&mut self, sample: GazeSample) {
        self.samples.push(sample);
    }
}

impl FromIterator<GazeSample> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = GazeSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let a = GazeSample::new(0.0, 0.0, 0.0);
        let b = GazeSample::new(0.1, 3.0, 4.0);

        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_time_delta_is_signed() {
        let a = GazeSample::new(1.0, 0.0, 0.0);
        let b = GazeSample::new(1.5, 0.0, 0.0);

        assert_eq!(a.time_delta_to(&b), 0.5);
        assert_eq!(b.time_delta_to(&a), -0.5);
    }

    #[test]
    fn test_series_preserves_insertion_order() {
        let mut series = SampleSeries::default();
        series.push(GazeSample::new(2.0, 1.0, 1.0));
        series.push(GazeSample::new(1.0, 2.0, 2.0));

        assert_eq!(series.len(), 2);
        assert_eq!(series.samples()[0].elapsed_seconds, 2.0);
        assert_eq!(series.samples()[1].elapsed_seconds, 1.0);
    }
}

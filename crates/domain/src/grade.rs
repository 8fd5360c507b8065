//! Attention grade buckets over the final integer score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-bucket grade assigned to a completed analysis.
///
/// The buckets partition the clamped score range [1, 100] with no gaps or
/// overlaps; `from_score` is total over all integers so out-of-range inputs
/// still map to the nearest bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttentionGrade {
    /// Score 85 and above
    Excellent,
    /// Score 70–84
    Good,
    /// Score 55–69
    Moderate,
    /// Score 40–54
    NeedsImprovement,
    /// Score below 40
    Poor,
}

impl AttentionGrade {
    /// Bucket the final integer score.
    pub fn from_score(score: i64) -> Self {
        if score >= 85 {
            Self::Excellent
        } else if score >= 70 {
            Self::Good
        } else if score >= 55 {
            Self::Moderate
        } else if score >= 40 {
            Self::NeedsImprovement
        } else {
            Self::Poor
        }
    }

    /// Human-readable description used in the analysis message.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent attention patterns",
            Self::Good => "Good attention stability",
            Self::Moderate => "Moderate attention focus",
            Self::NeedsImprovement => "Needs attention improvement",
            Self::Poor => "Poor attention patterns",
        }
    }
}

impl fmt::Display for AttentionGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

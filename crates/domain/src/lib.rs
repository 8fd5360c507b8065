//! Gaze Insight Domain Types
//!
//! This crate provides the core domain model for the Gaze Insight analysis
//! service. It defines the gaze sample series, the derived statistics, the
//! attention grade buckets, the analysis report payloads, and the error
//! taxonomy for the analysis pipeline.
//!
//! ## Architecture
//!
//! The domain layer is organized into the following modules:
//!
//! - **sample**: Gaze observations and the ordered sample series
//! - **statistics**: Raw (full precision) and presentation (rounded) statistics
//! - **grade**: The five-bucket attention grade over the final score
//! - **report**: The success/failure analysis payloads returned to callers
//! - **errors**: Parse and computation error types
//!
//! ## Usage
//!
//! ```rust
//! use gaze_insight_domain::{AttentionGrade, GazeSample, SampleSeries};
//!
//! let series = SampleSeries::new(vec![
//!     GazeSample::new(0.0, 100.0, 200.0),
//!     GazeSample::new(0.016, 101.0, 201.0),
//! ]);
//! assert_eq!(series.len(), 2);
//!
//! let grade = AttentionGrade::from_score(72);
//! assert_eq!(grade.description(), "Good attention stability");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod grade;
pub mod report;
pub mod sample;
pub mod statistics;

pub use errors::{AnalysisError, AnalysisResult, ComputationError, ParseError};
pub use grade::AttentionGrade;
pub use report::{AnalysisFailure, AnalysisOutcome, AnalysisReport};
pub use sample::{GazeSample, SampleSeries};
pub use statistics::{round2, AnalysisSummary, RawStatistics};

//! Error types for the analysis pipeline.
//!
//! Every error raised by any pipeline stage is caught at the orchestrator
//! and converted into the failure payload; nothing here escapes to callers
//! as a panic or transport error. Error codes are stable identifiers for
//! logs and programmatic handling.

/// Errors raised while turning raw tabular text into a sample series.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required column is absent from the header row.
    #[error("Required column not found: {0:?}")]
    MissingColumn(&'static str),

    /// A cell in a required column is not a floating-point number.
    #[error("Row {row}: column {column:?} is not a number: {value:?}")]
    InvalidNumber {
        /// 1-based data row number (header excluded)
        row: usize,
        /// Name of the offending column
        column: &'static str,
        /// The raw cell content
        value: String,
    },

    /// The input could not be tokenized into rows and columns.
    #[error("Malformed tabular input: {0}")]
    Malformed(String),

    /// The table has a header but no data rows.
    #[error("No data rows found")]
    Empty,
}

/// Errors raised while deriving statistics from a sample series.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComputationError {
    /// Statistics are undefined for an empty series.
    #[error("Cannot compute statistics for an empty series")]
    EmptySeries,

    /// A per-step speed was infinite or NaN, typically because the elapsed
    /// time did not advance between two consecutive samples.
    #[error("Non-finite speed at step {step}: elapsed time did not advance")]
    NonFiniteSpeed {
        /// 1-based index of the offending step
        step: usize,
    },

    /// A derived quantity came out NaN and cannot be scored.
    #[error("Derived statistic {quantity:?} is not a number")]
    NonFiniteResult {
        /// Name of the quantity that failed
        quantity: &'static str,
    },
}

/// Umbrella error for the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Input could not be parsed into a sample series.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Statistics could not be derived from the series.
    #[error("Computation error: {0}")]
    Computation(#[from] ComputationError),
}

impl AnalysisError {
    /// Stable error code for logs and programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "PARSE_ERROR",
            Self::Computation(_) => "COMPUTATION_ERROR",
        }
    }
}

/// Result type for pipeline stages.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AnalysisError::from(ParseError::MissingColumn("y"));
        assert_eq!(err.error_code(), "PARSE_ERROR");

        let err = AnalysisError::from(ComputationError::NonFiniteSpeed { step: 3 });
        assert_eq!(err.error_code(), "COMPUTATION_ERROR");
    }

    #[test]
    fn test_display_includes_context() {
        let err = ParseError::InvalidNumber {
            row: 2,
            column: "x",
            value: "abc".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("Row 2"));
        assert!(rendered.contains("\"x\""));
        assert!(rendered.contains("abc"));
    }
}

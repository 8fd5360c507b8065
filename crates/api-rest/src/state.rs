//! Application state and dependency injection.
//!
//! The shared state passed to all route handlers via Axum's state
//! extraction. The analyzer sits behind a small trait object so tests can
//! substitute a stub without standing up the real pipeline.

use crate::config::ApiConfig;
use gaze_insight_application::AnalysisService;
use gaze_insight_domain::AnalysisOutcome;
use std::sync::Arc;

/// Type-erased analyzer interface for route handlers.
pub trait AnalyzerPort: Send + Sync {
    /// Run the analysis pipeline over a raw gaze recording.
    fn analyze(&self, input: &str) -> AnalysisOutcome;
}

impl AnalyzerPort for AnalysisService {
    fn analyze(&self, input: &str) -> AnalysisOutcome {
        AnalysisService::analyze(self, input)
    }
}

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,

    /// Analysis pipeline (type-erased)
    pub analyzer: Arc<dyn AnalyzerPort>,
}

impl AppState {
    /// Create application state with the real analysis pipeline.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
            analyzer: Arc::new(AnalysisService::new()),
        }
    }

    /// Create application state with a custom analyzer implementation.
    pub fn with_analyzer<A>(config: ApiConfig, analyzer: A) -> Self
    where
        A: AnalyzerPort + 'static,
    {
        Self {
            config: Arc::new(config),
            analyzer: Arc::new(analyzer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAnalyzer;

    impl AnalyzerPort for FixedAnalyzer {
        fn analyze(&self, _input: &str) -> AnalysisOutcome {
            AnalysisService::new().analyze("elapsedTime(seconds),x,y\n0.0,1.0,1.0\n")
        }
    }

    #[test]
    fn test_custom_analyzer_is_used() {
        let state = AppState::with_analyzer(ApiConfig::default(), FixedAnalyzer);
        let outcome = state.analyzer.analyze("ignored");
        assert!(outcome.is_completed());
    }
}

//! Gaze Insight REST API
//!
//! This crate provides the Axum-based REST surface for the Gaze Insight
//! analysis service: the analyze endpoint, health checks, OpenAPI
//! documentation, and request middleware.
//!
//! ## Architecture
//!
//! - **app**: Application builder assembling routes, middleware, and state
//! - **routes**: HTTP route handlers (health checks and the v1 API)
//! - **middleware**: Request ID and request logging middleware
//! - **extractors**: Validated JSON extraction
//! - **responses**: Standardized response envelope for service endpoints
//! - **error**: Transport-level error handling and conversion
//!
//! Analysis failures are NOT transport errors: the analyze endpoint always
//! answers HTTP 200 with either the report or the failure payload. The
//! `error` module covers only the request envelope itself (malformed JSON,
//! empty payload, oversized body).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gaze_insight_api_rest::app::create_app;
//! use gaze_insight_api_rest::config::ApiConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ApiConfig::from_env().expect("Failed to load config");
//!     let app = create_app(config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.server_address())
//!         .await
//!         .expect("Failed to bind");
//!
//!     axum::serve(listener, app).await.expect("Server error");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use app::create_app;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

//! API v1 routes.

use crate::state::AppState;
use axum::Router;

pub mod analyze;

/// Create all v1 API routes
pub fn routes() -> Router<AppState> {
    Router::new().merge(analyze::routes())
}

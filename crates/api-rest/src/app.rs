//! Application builder and configuration.
//!
//! This module provides the main application builder that assembles
//! all routes, middleware, and state into an Axum router.

use crate::{
    config::ApiConfig,
    middleware::{logging_middleware, request_id::request_id_middleware},
    routes,
    state::AppState,
};
use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create the main application router with the real analysis pipeline
pub fn create_app(config: ApiConfig) -> Router {
    let state = AppState::new(config.clone());
    create_app_with_state(config, state)
}

/// Create the application router over pre-built state
///
/// Split out so tests can inject a stub analyzer via
/// [`AppState::with_analyzer`].
pub fn create_app_with_state(config: ApiConfig, state: AppState) -> Router {
    // Build CORS layer
    let cors = build_cors_layer(&config);

    // Build the router
    let mut app = Router::new()
        // Health check routes
        .merge(routes::health::routes())
        // API v1 routes
        .nest("/api/v1", routes::v1::routes())
        // Add state
        .with_state(state);

    // Add Swagger UI if enabled
    if config.enable_swagger {
        app = app.merge(swagger_ui());
    }

    app
        // Add middleware layers
        .layer(
            ServiceBuilder::new()
                // Tracing
                .layer(TraceLayer::new_for_http())
                // Compression
                .layer(CompressionLayer::new())
                // CORS
                .layer(cors)
                // Timeout
                .layer(TimeoutLayer::new(config.request_timeout()))
                // Body size cap
                .layer(DefaultBodyLimit::max(config.max_body_size))
                // Custom middleware
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn(logging_middleware)),
        )
}

/// Build CORS layer from configuration
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new();

    if config.cors_allowed_origins.contains(&"*".to_string()) {
        cors.allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        // In production, parse and validate allowed origins
        cors.allow_origin(Any).allow_methods(Any).allow_headers(Any)
    }
}

/// Create Swagger UI routes
fn swagger_ui() -> SwaggerUi {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Gaze Insight API",
            version = "1.0.0",
            description = "REST API for gaze-tracking attention analysis",
            license(name = "MIT"),
        ),
        servers(
            (url = "/api/v1", description = "API v1")
        ),
        tags(
            (name = "health", description = "Health check endpoints"),
            (name = "analysis", description = "Gaze recording analysis"),
        )
    )]
    struct ApiDoc;

    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

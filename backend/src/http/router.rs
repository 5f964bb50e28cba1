//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Control surface
        .route("/layout", get(handlers::get_layout))
        .route("/sites", get(handlers::list_sites))
        // Selection events
        .route("/selection", get(handlers::get_selection))
        .route("/selection/site", post(handlers::set_site))
        .route("/selection/payload-range", post(handlers::set_payload_range))
        // Rendering surface
        .route("/views", get(handlers::get_views))
        .route("/views/success-pie", get(handlers::get_success_pie))
        .route("/views/payload-scatter", get(handlers::get_payload_scatter));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

//! Football player profile API: proxies the upstream statistics API,
//! caches raw payloads for a short window, and shapes them into the
//! configured output mode.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod shape;
pub mod state;
pub mod upstream;

use state::AppState;

/// Assemble the service router.
pub fn app(state: Arc<AppState>) -> Router {
    // CORS configuration for browser frontends
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "Football Stats API - v1.0" }))
        .route("/health", get(routes::health::health_check))

        // Player endpoint
        .route("/api/player", get(routes::players::get_player))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

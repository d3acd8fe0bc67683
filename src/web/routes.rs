//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Main routes
        .route("/", get(handlers::index))
        .route("/generate", get(handlers::generate))
        .route("/download", get(handlers::download))
        .route("/about", get(handlers::about))
        .route("/stats", get(handlers::stats))
        // API routes
        .route("/health", get(handlers::health))
        // Static routes
        .route("/robots.txt", get(handlers::robots_txt))
        .route("/favicon.ico", get(handlers::favicon))
        // Add middleware
        .layer(cors)
        // Add state
        .with_state(state)
}

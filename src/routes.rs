//! Top-level router configuration combining pages, health and static assets.
//!
//! # Route Structure
//!
//! - HTML pages (see [`crate::web::routes::pages`])
//! - `/static/*`      - Static assets
//! - `GET  /health`   - Health check, the only path not view-counted
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **View counter** - Daily views and first visits, before every request
//!   except `/health`, including unmatched paths
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::middleware::view_counter;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_routes(state, static_dir))
}

/// Routes and middleware without path normalization.
///
/// The view counter wraps everything registered before it, the 404
/// fallback included; `/health` is added afterwards and stays uncounted.
pub fn app_routes(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .merge(web::routes::pages())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            view_counter::layer,
        ))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

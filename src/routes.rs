//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET /`                   - Welcome page
//! - `GET /dashboard?q=`       - Article dashboard
//! - `GET /health`             - Health check (database)
//! - `GET /api/articles?q=`    - Article list / search as JSON
//! - `GET /api/articles/{id}`  - Single article as JSON
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// Useful on its own in tests; production wraps it with
/// [`app_router`] for trailing-slash normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .merge(web::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

//! API route configuration.

use crate::api::handlers::{article_handler, article_list_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Read-only article API routes.
///
/// # Endpoints
///
/// - `GET /articles`       - List all articles, or search when `q` is present
/// - `GET /articles/{id}`  - Fetch one article
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(article_list_handler))
        .route("/articles/{id}", get(article_handler))
}

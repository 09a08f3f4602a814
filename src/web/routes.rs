//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, welcome_handler};
use axum::{Router, routing::get};

/// HTML page routes.
///
/// # Endpoints
///
/// - `GET /` - Welcome page
/// - `GET /dashboard` - Article list with search box
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/dashboard", get(dashboard_handler))
}

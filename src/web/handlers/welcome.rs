//! Welcome page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page.
#[derive(Template, WebTemplate)]
#[template(path = "welcome.html")]
pub struct WelcomeTemplate {
    pub version: &'static str,
}

/// Renders the static welcome page.
///
/// # Endpoint
///
/// `GET /`
pub async fn welcome_handler() -> impl IntoResponse {
    WelcomeTemplate {
        version: env!("CARGO_PKG_VERSION"),
    }
}

//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::api::extract::SearchQuery;
use crate::domain::entities::Article;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html` with:
/// - Article count heading
/// - Search box pre-filled with the current query
/// - "Using search" banner with a clear-filters link when a query is active
/// - Article list, or "No articles found"
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub articles: Vec<Article>,
    pub search_value: String,
    pub filter_active: bool,
}

impl DashboardTemplate {
    /// Builds the view model from the result set and the raw query.
    pub fn new(articles: Vec<Article>, query: Option<String>) -> Self {
        Self {
            articles,
            filter_active: query.is_some(),
            search_value: query.unwrap_or_default(),
        }
    }
}

/// Renders the article dashboard.
///
/// # Endpoint
///
/// `GET /dashboard?q=<query>`
///
/// Without `q` every article is listed; with `q` (even empty) the search
/// collaborator decides what is shown.
///
/// # Errors
///
/// Collaborator failures are returned as [`AppError`] responses.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    SearchQuery(query): SearchQuery,
) -> Result<DashboardTemplate, AppError> {
    let articles = state
        .article_service
        .dashboard_articles(query.as_deref())
        .await?;

    Ok(DashboardTemplate::new(articles, query))
}

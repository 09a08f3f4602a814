//! Handlers for the article JSON endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::article::{ArticleListResponse, ArticleResponse};
use crate::api::extract::SearchQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Lists or searches articles.
///
/// # Endpoint
///
/// `GET /api/articles?q=<query>`
///
/// # Response
///
/// ```json
/// {
///   "query": "java",
///   "total": 1,
///   "items": [
///     { "id": 3, "title": "...", "body": "...", "tags": ["java", "php"], ... }
///   ]
/// }
/// ```
pub async fn article_list_handler(
    State(state): State<AppState>,
    SearchQuery(query): SearchQuery,
) -> Result<Json<ArticleListResponse>, AppError> {
    let articles = state
        .article_service
        .dashboard_articles(query.as_deref())
        .await?;

    let items: Vec<ArticleResponse> = articles.into_iter().map(ArticleResponse::from).collect();

    Ok(Json(ArticleListResponse {
        query,
        total: items.len(),
        items,
    }))
}

/// Returns a single article.
///
/// # Endpoint
///
/// `GET /api/articles/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no article has this id.
pub async fn article_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArticleResponse>, AppError> {
    let article = state.article_service.get_article(id).await?;
    Ok(Json(article.into()))
}

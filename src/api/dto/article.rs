//! DTOs for article endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Article;

/// Single article as exposed over the API.
#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            body: article.body,
            tags: article.tags,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Article list response.
#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    /// The query that produced this list, `null` for an unfiltered listing.
    pub query: Option<String>,
    pub total: usize,
    pub items: Vec<ArticleResponse>,
}

//! Article listing and search service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Article;
use crate::domain::repositories::{ArticleRepository, ArticleSearch};
use crate::error::AppError;

/// Chooses between the full article list and the search collaborator.
///
/// The decision depends only on whether a query was supplied, not on its
/// content: an empty query is still a search.
pub struct ArticleService {
    repository: Arc<dyn ArticleRepository>,
    search: Arc<dyn ArticleSearch>,
}

impl ArticleService {
    /// Creates a new article service.
    pub fn new(repository: Arc<dyn ArticleRepository>, search: Arc<dyn ArticleSearch>) -> Self {
        Self { repository, search }
    }

    /// Returns the articles to display for an optional query.
    ///
    /// - `None` - every stored article, via [`ArticleRepository::find_all`]
    /// - `Some(q)` - whatever [`ArticleSearch::search`] returns for the literal `q`
    ///
    /// # Errors
    ///
    /// Propagates collaborator errors unchanged.
    pub async fn dashboard_articles(&self, query: Option<&str>) -> Result<Vec<Article>, AppError> {
        match query {
            Some(q) => {
                tracing::debug!(query = q, "Searching articles");
                self.search.search(q).await
            }
            None => self.repository.find_all().await,
        }
    }

    /// Retrieves a single article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no article has the given id.
    pub async fn get_article(&self, id: i64) -> Result<Article, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Article not found", json!({ "id": id })))
    }

    /// Returns the number of stored articles.
    pub async fn count_articles(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

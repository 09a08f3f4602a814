//! Repository trait for article data access.

use crate::domain::entities::{Article, NewArticle};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for articles.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgArticleRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_article.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Returns every article, unfiltered, in storage order (ascending id).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or corrupt tag data.
    async fn find_all(&self) -> Result<Vec<Article>, AppError>;

    /// Finds an article by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Article))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError>;

    /// Persists a new article and returns it with its assigned id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_article: NewArticle) -> Result<Article, AppError>;

    /// Counts all stored articles.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}

//! Search collaborator contract.

use crate::domain::entities::Article;
use crate::error::AppError;
use async_trait::async_trait;

/// Resolves a free-text query to the articles relevant to it.
///
/// The matching strategy belongs to the implementation. Callers pass the
/// query exactly as received, including an empty string, and display the
/// returned sequence as-is.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgArticleSearch`] - case-insensitive
///   substring match in PostgreSQL
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleSearch: Send + Sync {
    /// Returns zero or more articles relevant to `query`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend fails.
    async fn search(&self, query: &str) -> Result<Vec<Article>, AppError>;
}

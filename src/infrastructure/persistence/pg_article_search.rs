//! PostgreSQL-backed article search.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::pg_article_repository::{ARTICLE_COLUMNS, ArticleRow, into_articles};
use crate::domain::entities::Article;
use crate::domain::repositories::ArticleSearch;
use crate::error::AppError;

/// Case-insensitive substring search over title, body and tags.
///
/// The query is matched literally: `%` and `_` in user input carry no
/// wildcard meaning. An empty query matches every article.
pub struct PgArticleSearch {
    pool: Arc<PgPool>,
}

impl PgArticleSearch {
    /// Creates a new search backend with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleSearch for PgArticleSearch {
    async fn search(&self, query: &str) -> Result<Vec<Article>, AppError> {
        let pattern = like_pattern(query);

        let sql = format!(
            r#"
            SELECT {ARTICLE_COLUMNS}
            FROM articles
            WHERE title ILIKE $1
               OR body ILIKE $1
               OR EXISTS (
                    SELECT 1 FROM jsonb_array_elements_text(tags) AS tag
                    WHERE tag ILIKE $1
               )
            ORDER BY id
            "#
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(&pattern)
            .fetch_all(self.pool.as_ref())
            .await?;

        tracing::debug!(query, hits = rows.len(), "Article search");

        into_articles(rows)
    }
}

/// Builds a `%...%` ILIKE pattern, escaping the LIKE metacharacters.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_query() {
        assert_eq!(like_pattern("java"), "%java%");
    }

    #[test]
    fn test_like_pattern_empty_query_matches_everything() {
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("100%_off"), r"%100\%\_off%");
        assert_eq!(like_pattern(r"a\b"), r"%a\\b%");
    }

    #[test]
    fn test_like_pattern_keeps_whitespace() {
        assert_eq!(like_pattern("  ruby "), "%  ruby %");
    }
}

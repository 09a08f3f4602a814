//! PostgreSQL implementation of the article repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::tag_codec::{decode_tags, encode_tags};
use crate::domain::entities::{Article, NewArticle};
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

/// Column list shared by every article query.
pub(crate) const ARTICLE_COLUMNS: &str = "id, title, body, tags, created_at, updated_at";

/// Raw `articles` row before the tags column is decoded.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ArticleRow {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub tags: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = AppError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let tags = decode_tags(row.tags).map_err(|e| {
            tracing::error!(article_id = row.id, error = %e, "Corrupt tags column");
            AppError::internal(
                "Corrupt tags column",
                json!({ "article_id": row.id, "reason": e.to_string() }),
            )
        })?;

        Ok(Article::new(
            row.id,
            row.title,
            row.body,
            tags,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// Decodes a batch of rows, failing on the first corrupt one.
pub(crate) fn into_articles(rows: Vec<ArticleRow>) -> Result<Vec<Article>, AppError> {
    rows.into_iter().map(Article::try_from).collect()
}

/// PostgreSQL repository for article storage and retrieval.
pub struct PgArticleRepository {
    pool: Arc<PgPool>,
}

impl PgArticleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn find_all(&self) -> Result<Vec<Article>, AppError> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY id");
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        into_articles(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Article::try_from).transpose()
    }

    async fn create(&self, new_article: NewArticle) -> Result<Article, AppError> {
        let sql = format!(
            r#"
            INSERT INTO articles (title, body, tags)
            VALUES ($1, $2, $3)
            RETURNING {ARTICLE_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(&new_article.title)
            .bind(&new_article.body)
            .bind(encode_tags(&new_article.tags))
            .fetch_one(self.pool.as_ref())
            .await?;

        Article::try_from(row)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

//! Article entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted article with its tags.
///
/// `tags` keeps the order in which the labels were stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Creates a new Article instance.
    pub fn new(
        id: i64,
        title: String,
        body: String,
        tags: Vec<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            body,
            tags,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new article.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

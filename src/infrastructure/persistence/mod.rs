//! PostgreSQL implementations of the domain traits.
//!
//! Queries are built with SQLx and bound parameters; rows are mapped through
//! [`tag_codec`] so the JSON `tags` column is decoded explicitly.
//!
//! # Implementations
//!
//! - [`PgArticleRepository`] - Article storage and retrieval
//! - [`PgArticleSearch`] - Substring search over title, body and tags

pub mod pg_article_repository;
pub mod pg_article_search;
pub mod tag_codec;

pub use pg_article_repository::PgArticleRepository;
pub use pg_article_search::PgArticleSearch;

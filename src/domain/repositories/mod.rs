//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Traits
//!
//! - [`ArticleRepository`] - Article storage and lookup
//! - [`ArticleSearch`] - Free-text article search
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod article_repository;
pub mod article_search;

pub use article_repository::ArticleRepository;
pub use article_search::ArticleSearch;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
#[cfg(test)]
pub use article_search::MockArticleSearch;

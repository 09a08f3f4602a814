//! HTTP request handlers for API endpoints.

pub mod articles;
pub mod health;

pub use articles::{article_handler, article_list_handler};
pub use health::health_handler;

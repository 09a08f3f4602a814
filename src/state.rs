//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::ArticleService;

/// Application state cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub article_service: Arc<ArticleService>,
}

impl AppState {
    /// Creates the state from a ready article service.
    pub fn new(article_service: Arc<ArticleService>) -> Self {
        Self { article_service }
    }
}

#![allow(dead_code)]

use article_dashboard::application::services::ArticleService;
use article_dashboard::domain::entities::{Article, NewArticle};
use article_dashboard::domain::repositories::{ArticleRepository, ArticleSearch};
use article_dashboard::error::AppError;
use article_dashboard::routes::router;
use article_dashboard::state::AppState;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// In-memory article store that also acts as the search collaborator.
///
/// Records every search query and every `find_all` call so tests can check
/// which branch a request took.
#[derive(Default)]
pub struct InMemoryArticles {
    articles: Mutex<Vec<Article>>,
    searches: Mutex<Vec<String>>,
    find_all_calls: Mutex<usize>,
}

impl InMemoryArticles {
    pub fn with(items: Vec<NewArticle>) -> Self {
        let store = Self::default();
        for item in items {
            store.insert(item);
        }
        store
    }

    pub fn insert(&self, new_article: NewArticle) -> Article {
        let mut articles = self.articles.lock().unwrap();
        let now = Utc::now();
        let article = Article::new(
            articles.len() as i64 + 1,
            new_article.title,
            new_article.body,
            new_article.tags,
            now,
            now,
        );
        articles.push(article.clone());
        article
    }

    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }

    pub fn find_all_calls(&self) -> usize {
        *self.find_all_calls.lock().unwrap()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticles {
    async fn find_all(&self) -> Result<Vec<Article>, AppError> {
        *self.find_all_calls.lock().unwrap() += 1;
        Ok(self.articles.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn create(&self, new_article: NewArticle) -> Result<Article, AppError> {
        Ok(self.insert(new_article))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.articles.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl ArticleSearch for InMemoryArticles {
    async fn search(&self, query: &str) -> Result<Vec<Article>, AppError> {
        self.searches.lock().unwrap().push(query.to_string());

        let needle = query.to_lowercase();
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| {
                a.title.to_lowercase().contains(&needle)
                    || a.body.to_lowercase().contains(&needle)
                    || a.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}

/// Collaborator that fails every call, standing in for an unavailable backend.
pub struct BrokenBackend;

#[async_trait]
impl ArticleRepository for BrokenBackend {
    async fn find_all(&self) -> Result<Vec<Article>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Article>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn create(&self, _new_article: NewArticle) -> Result<Article, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}

#[async_trait]
impl ArticleSearch for BrokenBackend {
    async fn search(&self, _query: &str) -> Result<Vec<Article>, AppError> {
        Err(AppError::internal("Search backend unavailable", json!({})))
    }
}

pub fn new_article(title: &str, body: &str, tags: &[&str]) -> NewArticle {
    NewArticle {
        title: title.to_string(),
        body: body.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Three articles: one PHP/Ruby, one Java/Bash, one JavaScript/PHP.
pub fn sample_articles() -> Vec<NewArticle> {
    vec![
        new_article("Intro to scripting", "Getting started.", &["php", "ruby"]),
        new_article("Streams in depth", "Collectors and more.", &["java", "bash"]),
        new_article("Async everywhere", "Promises explained.", &["javascript", "php"]),
    ]
}

pub fn create_test_state(store: Arc<InMemoryArticles>) -> AppState {
    let service = ArticleService::new(store.clone(), store);
    AppState::new(Arc::new(service))
}

pub fn broken_state() -> AppState {
    let backend = Arc::new(BrokenBackend);
    AppState::new(Arc::new(ArticleService::new(backend.clone(), backend)))
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

/// Sends a GET with the URI passed through untouched, for query strings the
/// test client would re-encode (bare or repeated keys).
pub async fn send_get(state: AppState, uri: &str) -> (StatusCode, String) {
    let response = router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn insert_article(pool: &PgPool, title: &str, body: &str, tags: serde_json::Value) -> i64 {
    sqlx::query_scalar("INSERT INTO articles (title, body, tags) VALUES ($1, $2, $3) RETURNING id")
        .bind(title)
        .bind(body)
        .bind(tags)
        .fetch_one(pool)
        .await
        .unwrap()
}

mod common;

use axum::http::StatusCode;
use common::{InMemoryArticles, make_server, sample_articles};
use std::sync::Arc;

#[tokio::test]
async fn test_dashboard_lists_every_article_without_query() {
    let store = Arc::new(InMemoryArticles::with(sample_articles()));
    let server = make_server(common::create_test_state(store.clone()));

    let response = server.get("/dashboard").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("(3)"));
    assert_eq!(html.matches("<article").count(), 3);
    for title in ["Intro to scripting", "Streams in depth", "Async everywhere"] {
        assert_eq!(html.matches(title).count(), 1, "{title} should appear once");
    }

    assert_eq!(store.find_all_calls(), 1);
    assert!(store.searches().is_empty());
    assert!(!html.contains("Clear filters"));
}

#[tokio::test]
async fn test_dashboard_empty_query_invokes_search() {
    let store = Arc::new(InMemoryArticles::with(sample_articles()));
    let server = make_server(common::create_test_state(store.clone()));

    let response = server.get("/dashboard").add_query_param("q", "").await;

    response.assert_status_ok();
    assert_eq!(store.searches(), vec![String::new()]);
    assert_eq!(store.find_all_calls(), 0);
    assert!(response.text().contains("Clear filters"));
}

#[tokio::test]
async fn test_dashboard_bare_query_invokes_search() {
    let store = Arc::new(InMemoryArticles::with(sample_articles()));

    let (status, html) = common::send_get(common::create_test_state(store.clone()), "/dashboard?q").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.searches(), vec![String::new()]);
    assert_eq!(store.find_all_calls(), 0);
    assert!(html.contains("Clear filters"));
}

#[tokio::test]
async fn test_dashboard_repeated_query_uses_last_value() {
    let store = Arc::new(InMemoryArticles::with(sample_articles()));

    let (status, html) =
        common::send_get(common::create_test_state(store.clone()), "/dashboard?q=a&q=bash").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.searches(), vec!["bash".to_string()]);
    assert_eq!(store.find_all_calls(), 0);
    assert!(html.contains(r#"value="bash""#));
    assert!(html.contains("Streams in depth"));
}

#[tokio::test]
async fn test_dashboard_unrelated_params_list_everything() {
    let store = Arc::new(InMemoryArticles::with(sample_articles()));

    let (status, html) = common::send_get(common::create_test_state(store.clone()), "/dashboard?x=1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(store.searches().is_empty());
    assert_eq!(store.find_all_calls(), 1);
    assert!(!html.contains("Clear filters"));
}

#[tokio::test]
async fn test_dashboard_search_shows_only_hits() {
    let store = Arc::new(InMemoryArticles::with(sample_articles()));
    let server = make_server(common::create_test_state(store.clone()));

    let response = server.get("/dashboard").add_query_param("q", "java").await;

    response.assert_status_ok();
    let html = response.text();

    assert_eq!(store.searches(), vec!["java".to_string()]);
    assert!(html.contains("(2)"));
    assert_eq!(html.matches("<article").count(), 2);
    assert!(html.contains("Streams in depth"));
    assert!(html.contains("Async everywhere"));
    assert!(!html.contains("Intro to scripting"));
    assert!(html.contains("Using search"));
    assert!(html.contains(r#"value="java""#));
}

#[tokio::test]
async fn test_dashboard_query_is_not_trimmed() {
    let store = Arc::new(InMemoryArticles::with(sample_articles()));
    let server = make_server(common::create_test_state(store.clone()));

    server
        .get("/dashboard")
        .add_query_param("q", " ruby ")
        .await
        .assert_status_ok();

    assert_eq!(store.searches(), vec![" ruby ".to_string()]);
}

#[tokio::test]
async fn test_dashboard_empty_store() {
    let store = Arc::new(InMemoryArticles::default());
    let server = make_server(common::create_test_state(store));

    let response = server.get("/dashboard").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("No articles found"));
    assert!(!html.contains("<article"));
    assert!(html.contains("(0)"));
}

#[tokio::test]
async fn test_dashboard_search_without_hits() {
    let store = Arc::new(InMemoryArticles::with(sample_articles()));
    let server = make_server(common::create_test_state(store));

    let response = server.get("/dashboard").add_query_param("q", "cobol").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("No articles found"));
    assert!(!html.contains("<article"));
}

#[tokio::test]
async fn test_dashboard_search_failure_propagates() {
    let server = make_server(common::broken_state());

    let response = server.get("/dashboard").add_query_param("q", "php").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_welcome_page() {
    let server = make_server(common::create_test_state(Arc::new(
        InMemoryArticles::default(),
    )));

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"href="/dashboard""#));
}

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use blogql::config::ServerSettings;
use blogql::graphql::{build_app, build_schema, run_server};
use blogql::storage::BlogStore;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> axum::Router {
    let schema = build_schema(Arc::new(BlogStore::seeded()));
    build_app(schema, &ServerSettings::default())
}

fn graphql_post(query: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_post_query() {
    let response = app()
        .oneshot(graphql_post("{ posts { title author { name } } }"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["posts"][0]["author"]["name"], "Foo Cai");
    assert_eq!(body["data"]["posts"][1]["author"]["name"], "Lives Zhao");
}

#[tokio::test]
async fn test_get_query_string() {
    let request = Request::builder()
        .method("GET")
        .uri("/graphql?query=%7B%20authors%20%7B%20name%20%7D%20%7D")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"]["authors"][1]["name"], "Bar Li");
}

#[tokio::test]
async fn test_age_response_carries_cache_control() {
    let response = app()
        .oneshot(graphql_post("{ posts { key age } }"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .expect("cache-control header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cache_control.contains("max-age=5"), "got {}", cache_control);
}

#[tokio::test]
async fn test_errors_use_graphql_envelope() {
    let response = app()
        .oneshot(graphql_post("{ nope }"))
        .await
        .unwrap();

    let body = json_body(response).await;
    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_graphiql_page() {
    let request = Request::builder()
        .uri("/graphiql")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.to_lowercase().contains("graphiql"));
    assert!(html.contains("/graphql"));
}

#[tokio::test]
async fn test_graphiql_page_with_trailing_slash() {
    let request = Request::builder()
        .uri("/graphiql/")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn test_unknown_route() {
    let request = Request::builder()
        .uri("/nothing-here")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_run_server_reports_bind_failure() {
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let settings = ServerSettings {
        host: "127.0.0.1".to_string(),
        port: taken.local_addr().unwrap().port(),
        ..ServerSettings::default()
    };
    let schema = build_schema(Arc::new(BlogStore::seeded()));

    let err = run_server(schema, &settings).await.unwrap_err();
    assert!(err.to_string().contains("Failed to bind"));
}

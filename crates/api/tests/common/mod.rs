#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pages_api::config::ServerConfig;
use pages_api::router::build_app_router;
use pages_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over a fresh store.
///
/// The returned state shares the router's store so tests can inspect it
/// directly.
pub fn build_test_app() -> (Router, AppState) {
    let config = test_config();
    let state = AppState::new();
    (build_app_router(state.clone(), &config), state)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

fn form_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST a urlencoded form body, e.g. `"name=a&img=b&text=c"`.
pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    send(app, form_request(Method::POST, uri, body)).await
}

/// PUT a urlencoded form body.
pub async fn put_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    send(app, form_request(Method::PUT, uri, body)).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a page through the API and return its id.
pub async fn create_page(app: &Router, name: &str, img: &str, text: &str) -> i64 {
    let body = format!("name={name}&img={img}&text={text}");
    let json = body_json(post_form(app, "/api/pages", &body).await).await;
    json["id"].as_i64().unwrap()
}

//! Test helpers building the application router without binding a socket.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use counsel::{
    AppState, Config,
    config::{ContactConfig, ObservabilityConfig, ServerConfig, WebConfig},
};
use counsel_contact::{ContactSubmission, Inbox};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn test_config(dist_dir: impl Into<String>) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
        },
        web: WebConfig {
            dist_dir: dist_dir.into(),
        },
        contact: ContactConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

/// Router with the default discarding inbox and no site directory
pub fn create_app() -> Router {
    counsel::router(AppState::new(test_config("does-not-exist")))
}

pub fn create_app_with_inbox(inbox: impl Inbox + 'static) -> Router {
    counsel::router(AppState::new(test_config("does-not-exist")).with_inbox(inbox))
}

pub fn post_contact(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, request).await;

    (status, serde_json::from_str(&body).unwrap())
}

/// Inbox whose delivery always fails
pub struct FailingInbox;

#[async_trait::async_trait]
impl Inbox for FailingInbox {
    async fn deliver(&self, _submission: &ContactSubmission) -> anyhow::Result<()> {
        anyhow::bail!("smtp relay at 10.0.0.7 refused connection")
    }
}

/// Inbox that panics on delivery
pub struct PanickingInbox;

#[async_trait::async_trait]
impl Inbox for PanickingInbox {
    async fn deliver(&self, _submission: &ContactSubmission) -> anyhow::Result<()> {
        panic!("inbox state corrupted")
    }
}

use std::{any::Any, path::Path, sync::Arc};

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{any, get, post},
};
use counsel_contact::{DiscardInbox, Inbox};
use serde_json::json;
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::{ServeDir, ServeFile},
};

pub mod contact;
mod health;

pub use contact::Envelope;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub inbox: Arc<dyn Inbox>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            inbox: Arc::new(DiscardInbox),
        }
    }

    pub fn with_inbox(mut self, inbox: impl Inbox + 'static) -> Self {
        self.inbox = Arc::new(inbox);
        self
    }
}

async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"success": false, "message": "Not found"})),
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!("Request handler panicked: {details}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(contact::Envelope::failed()),
    )
        .into_response()
}

pub fn router(app_state: AppState) -> Router {
    let dist_dir = app_state.config.web.dist_dir.clone();

    let router = Router::new()
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .route("/api/{*rest}", any(api_not_found))
        .with_state(app_state);

    let router = if Path::new(&dist_dir).is_dir() {
        let index = Path::new(&dist_dir).join("index.html");
        router.fallback_service(ServeDir::new(&dist_dir).fallback(ServeFile::new(index)))
    } else {
        tracing::warn!("Site directory {dist_dir} not found, static serving disabled");
        router
    };

    router.layer(CatchPanicLayer::custom(handle_panic))
}

//! Stand-in for the local test server.
//!
//! Binds an ephemeral port, answers `POST /test/reset` with a configurable
//! status and the upstream server's plain-text reply, and records every
//! request it sees so tests can assert the exact wire shape.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use tokio::net::TcpListener;

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    /// Every `Content-Type` value received, in order.
    pub content_types: Vec<String>,
    pub body: String,
}

pub type Seen = Arc<Mutex<Vec<SeenRequest>>>;

#[derive(Clone)]
struct AppState {
    status: StatusCode,
    seen: Seen,
}

/// Start the server on a random port. Returns the full reset endpoint URL
/// and the request log.
pub async fn start(status: StatusCode) -> (String, Seen) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));

    let router = Router::new().route("/test/reset", post(reset)).with_state(AppState {
        status,
        seen: Arc::clone(&seen),
    });
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{addr}/test/reset"), seen)
}

async fn reset(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    let content_types = headers
        .get_all("content-type")
        .iter()
        .map(|value| value.to_str().unwrap_or("<binary>").to_string())
        .collect();
    state.seen.lock().unwrap().push(SeenRequest { content_types, body });
    (state.status, "Database reset successfully")
}

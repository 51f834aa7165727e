//! A local stand-in for the Dream Diary backend.
//!
//! It records every request it receives and replies with a canned JSON body,
//! so contract tests can assert the method, URL, headers and body the client
//! put on the wire.
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;
use tokio::sync::Mutex;
use url::Url;

pub const DEFAULT_RESPONSE_BODY: &str = r#"{"ok":true}"#;

/// One request as the backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path_and_query: String,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
    pub body: Bytes,
}

#[derive(Clone)]
struct AppState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    response_status: u16,
    response_body: &'static str,
}

/// A running backend double.
pub struct Started {
    local_addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl Started {
    /// Starts a backend replying `200` with `{"ok":true}` to everything.
    #[allow(dead_code)]
    pub async fn new() -> Self {
        Self::with_response(200, DEFAULT_RESPONSE_BODY).await
    }

    /// Starts a backend replying with the given status and body to everything.
    #[allow(dead_code)]
    pub async fn with_response(status: u16, body: &'static str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));

        let state = AppState {
            requests: requests.clone(),
            response_status: status,
            response_body: body,
        };

        let app = Router::new().fallback(record).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("a free port should be available");
        let local_addr = listener.local_addr().expect("the listener should have an address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("the backend double should be running");
        });

        Self { local_addr, requests }
    }

    #[allow(dead_code)]
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.local_addr)).expect("a valid base URL")
    }

    /// The requests received so far, in arrival order.
    #[allow(dead_code)]
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    #[allow(dead_code)]
    pub async fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .await
            .last()
            .cloned()
            .expect("the backend double should have received a request")
    }
}

/// A base URL nothing listens on, to provoke transport failures.
#[allow(dead_code)]
pub async fn unreachable_base_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("a free port should be available");
    let local_addr = listener.local_addr().expect("the listener should have an address");
    drop(listener);

    Url::parse(&format!("http://{local_addr}")).expect("a valid base URL")
}

async fn record(State(state): State<AppState>, request: Request) -> impl IntoResponse {
    let (parts, body) = request.into_parts();

    let header = |name| {
        parts
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string)
    };

    let recorded = RecordedRequest {
        method: parts.method.to_string(),
        path_and_query: parts
            .uri
            .path_and_query()
            .map(ToString::to_string)
            .unwrap_or_default(),
        content_type: header(CONTENT_TYPE),
        authorization: header(AUTHORIZATION),
        body: axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default(),
    };

    state.requests.lock().await.push(recorded);

    (
        StatusCode::from_u16(state.response_status).expect("a valid status code"),
        [(CONTENT_TYPE, "application/json")],
        state.response_body,
    )
}

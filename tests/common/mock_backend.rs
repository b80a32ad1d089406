//! Local HTTP server standing in for the fake-data endpoints.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::get;
use axum::Router;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};

/// A GET the server has seen.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
}

/// Canned reply for one request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            ..Self::json(&format!(r#"{{"error": "{}"}}"#, message))
        }
    }

    pub fn text(body: &str) -> Self {
        Self {
            content_type: "text/html",
            ..Self::json(body)
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Reply for a request nothing was queued for.
    fn unscripted(path: &str) -> Self {
        Self::error(404, &format!("no response queued for {}", path))
    }
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    /// Replies keyed by path; `None` holds replies for any path.
    queues: Arc<Mutex<HashMap<Option<String>, VecDeque<MockResponse>>>>,
}

impl MockState {
    async fn next_response(&self, path: &str) -> MockResponse {
        let mut queues = self.queues.lock().await;
        if let Some(resp) = queues
            .get_mut(&Some(path.to_string()))
            .and_then(VecDeque::pop_front)
        {
            return resp;
        }
        queues
            .get_mut(&None)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| MockResponse::unscripted(path))
    }
}

/// Serves queued responses to GET requests on any path.
pub struct MockBackend {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: watch::Sender<bool>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = MockState::default();
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let app = Router::new()
            .route("/{*path}", get(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Queue a reply for the next request on any path.
    pub async fn enqueue_response(&self, resp: MockResponse) {
        self.push(None, resp).await;
    }

    /// Queue a reply for the next request on `path`.
    pub async fn enqueue_for(&self, path: &str, resp: MockResponse) {
        self.push(Some(path.to_string()), resp).await;
    }

    async fn push(&self, key: Option<String>, resp: MockResponse) {
        self.state
            .queues
            .lock()
            .await
            .entry(key)
            .or_default()
            .push_back(resp);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let path = req.uri().path().to_string();
    state.requests.lock().await.push(CapturedRequest {
        method: req.method().to_string(),
        path: path.clone(),
        query: req.uri().query().map(String::from),
    });

    let reply = state.next_response(&path).await;
    if reply.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(reply.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(reply.status).unwrap())
        .header("content-type", reply.content_type)
        .body(Body::from(reply.body))
        .unwrap()
}

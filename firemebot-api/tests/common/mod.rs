#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, HeaderName, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use firemebot_app::config::AppConfig;
use firemebot_app::infrastructure::openai::RetryPolicy;
use firemebot_app::infrastructure::security::UnmatchedOrigin;
use firemebot_app::AppContext;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceExt;

pub const TEST_SALT: &str = "test-salt";

/// One scripted reply of the stub server.
#[derive(Clone)]
pub struct StubReply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl StubReply {
    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn json(status: u16, body: Value) -> Self {
        Self::text(status, &body.to_string())
    }

    /// A Responses API success carrying `model_text` as `output_text`.
    pub fn model_text(model_text: &str) -> Self {
        Self::json(200, json!({ "status": "completed", "output_text": model_text }))
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone)]
struct StubState {
    replies: Arc<Vec<StubReply>>,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Value>>>,
    arrivals: Arc<Mutex<Vec<Instant>>>,
}

/// Local HTTP server answering every request with the next scripted reply
/// (the last one repeats).
pub struct Stub {
    base_url: String,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Value>>>,
    arrivals: Arc<Mutex<Vec<Instant>>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Stub {
    pub async fn start(replies: Vec<StubReply>) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let arrivals = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            replies: Arc::new(replies),
            calls: calls.clone(),
            requests: requests.clone(),
            arrivals: arrivals.clone(),
        };

        let router = Router::new().fallback(reply).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub server local addr");
        let (tx, rx) = oneshot::channel::<()>();

        let server = axum::serve(listener, router.into_make_service());
        tokio::spawn(async move {
            tokio::select! {
                res = server => {
                    if let Err(err) = res {
                        eprintln!("Stub server error: {err:?}");
                    }
                }
                _ = rx => {}
            }
        });

        Stub {
            base_url: format!("http://{}", addr),
            calls,
            requests,
            arrivals,
            shutdown: Some(tx),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().expect("lock stub requests").clone()
    }

    /// Time between consecutive requests.
    pub fn gaps(&self) -> Vec<Duration> {
        let arrivals = self.arrivals.lock().expect("lock stub arrivals");
        arrivals.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

impl Drop for Stub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn reply(State(state): State<StubState>, body: Bytes) -> Response {
    let n = state.calls.fetch_add(1, Ordering::SeqCst);
    state
        .arrivals
        .lock()
        .expect("lock stub arrivals")
        .push(Instant::now());
    state
        .requests
        .lock()
        .expect("lock stub requests")
        .push(serde_json::from_slice(&body).unwrap_or(Value::Null));

    let reply = state
        .replies
        .get(n)
        .or_else(|| state.replies.last())
        .cloned()
        .expect("stub needs at least one reply");

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    (
        StatusCode::from_u16(reply.status).expect("valid stub status"),
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (HeaderName::from_static("x-request-id"), format!("req_{n}")),
        ],
        reply.body,
    )
        .into_response()
}

/// Retry policy with short, deterministic delays.
pub fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        base_delay: Duration::from_millis(50),
        max_jitter: Duration::ZERO,
        attempt_timeout: Duration::from_secs(5),
    }
}

pub fn test_config(upstream_url: String) -> AppConfig {
    AppConfig {
        openai_api_key: "sk-test".to_string(),
        openai_api_url: upstream_url,
        hash_salt: TEST_SALT.to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        app_env: "test".to_string(),
        cors_allowed_origins: Vec::new(),
        cors_unmatched: UnmatchedOrigin::Fallback("https://firemebot.com".to_string()),
    }
}

pub fn test_context(upstream: &Stub, retry: RetryPolicy) -> AppContext {
    AppContext::new(&test_config(upstream.url("/v1/responses")), retry)
}

pub fn barista_roast() -> Value {
    json!({
        "title": "Caffeinated Extinction",
        "score": 25,
        "body": "Espresso machines and AI ordering systems may erode parts of the craft, but the human touch of hospitality remains hard to replace.",
        "post": "Even coffee culture can't escape automation, though your smile might outlast your shift.",
        "tip": ["Customer Experience Specialist", "Hospitality Manager", "Event Coordinator"]
    })
}

pub fn post_roast(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/roast")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

/// Sends `request` through `router`, returning the response and its body.
pub async fn send(router: Router, request: Request<Body>) -> (Response, Bytes) {
    let response = router.oneshot(request).await.expect("router is infallible");
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("read response body");
    (Response::from_parts(parts, Body::empty()), bytes)
}

pub fn as_json(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).expect("response body is JSON")
}

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use firemebot_app::infrastructure::security::CorsPolicy;
use firemebot_errors::AppError;
use std::any::Any;
use std::sync::Arc;
use tracing::Span;

const ALLOW_METHODS: &str = "GET,POST,OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";
const MAX_AGE_SECS: &str = "86400";

/// Answers every `OPTIONS` preflight with 204 and stamps CORS headers on
/// all other responses.
pub async fn cors(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let allow_origin = policy.allow_origin(origin.as_deref());

    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    apply_cors_headers(response.headers_mut(), allow_origin.as_deref());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap, allow_origin: Option<&str>) {
    if let Some(value) = allow_origin.and_then(|o| HeaderValue::from_str(o).ok()) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(MAX_AGE_SECS),
    );
    headers.insert(header::VARY, HeaderValue::from_static("Origin"));
}

/// Last line of defence: a panic anywhere below becomes a 500 envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("worker_exception: {}", message);

    AppError::WorkerException("Unexpected server error.".to_string()).into_response()
}

pub fn make_request_span(request: &Request) -> Span {
    let request_id = uuid::Uuid::new_v4();
    tracing::info_span!(
        "request",
        %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    )
}

/// Caller IP as reported by the edge proxy, if any.
pub fn client_ip(headers: &HeaderMap) -> Option<String> {
    let header_str = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    header_str("cf-connecting-ip")
        .or_else(|| header_str("x-forwarded-for").and_then(|v| v.split(',').next()))
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
}

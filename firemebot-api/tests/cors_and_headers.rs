mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use common::{as_json, fast_retry, send, test_config, Stub, StubReply};
use firemebot_api::{build_router, with_middleware};
use firemebot_app::infrastructure::security::{CorsPolicy, UnmatchedOrigin};
use firemebot_app::AppContext;
use std::sync::Arc;

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/api/roast")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap()
}

async fn app_with(unmatched: UnmatchedOrigin) -> (Router, Stub) {
    let upstream = Stub::start(vec![StubReply::model_text("{}")]).await;
    let mut config = test_config(upstream.url("/v1/responses"));
    config.cors_unmatched = unmatched;
    (build_router(AppContext::new(&config, fast_retry())), upstream)
}

fn assert_security_headers(headers: &axum::http::HeaderMap) {
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["referrer-policy"], "same-origin");
    assert_eq!(
        headers["permissions-policy"],
        "geolocation=(), microphone=(), camera=()"
    );
}

#[tokio::test]
async fn preflight_echoes_allowed_origin() {
    let (app, upstream) =
        app_with(UnmatchedOrigin::Fallback("https://firemebot.com".into())).await;

    let (response, body) = send(app, preflight("http://localhost:5173")).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET,POST,OPTIONS");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type, Authorization"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
    assert_eq!(headers[header::VARY], "Origin");
    assert_security_headers(headers);
    assert_eq!(upstream.calls(), 0);
}

#[tokio::test]
async fn preflight_on_any_path() {
    let (app, _upstream) =
        app_with(UnmatchedOrigin::Fallback("https://firemebot.com".into())).await;

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/whatever")
        .body(Body::empty())
        .unwrap();
    let (response, _) = send(app, request).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unmatched_origin_falls_back_to_production() {
    let (app, _upstream) =
        app_with(UnmatchedOrigin::Fallback("https://firemebot.com".into())).await;

    let (response, _) = send(app, preflight("https://evil.example")).await;

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://firemebot.com"
    );
}

#[tokio::test]
async fn unmatched_origin_rejected_when_configured() {
    let (app, _upstream) = app_with(UnmatchedOrigin::Reject).await;

    let (response, _) = send(app, preflight("https://evil.example")).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
    assert_security_headers(response.headers());
}

#[tokio::test]
async fn error_responses_carry_cors_and_security_headers() {
    let (app, _upstream) =
        app_with(UnmatchedOrigin::Fallback("https://firemebot.com".into())).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/roast")
        .header(header::ORIGIN, "https://natwerth.github.io")
        .body(Body::from(r#"{"title": ""}"#))
        .unwrap();
    let (response, _) = send(app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://natwerth.github.io"
    );
    assert_security_headers(response.headers());
}

#[tokio::test]
async fn panics_become_worker_exception() {
    async fn explode() -> &'static str {
        panic!("handler exploded")
    }

    let router = Router::new().route("/boom", get(explode));
    let app = with_middleware(router, Arc::new(CorsPolicy::default()));

    let request = Request::builder().uri("/boom").body(Body::empty()).unwrap();
    let (response, body) = send(app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_security_headers(response.headers());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://firemebot.com"
    );
    let body = as_json(&body);
    assert_eq!(body["error"], "WORKER_EXCEPTION");
    assert_eq!(body["status"], 500);
}

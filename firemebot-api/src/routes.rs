use crate::middleware::{self, client_ip};
use axum::body::{to_bytes, Body, Bytes};
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use firemebot_app::domain::RoastEnvelope;
use firemebot_app::infrastructure::security::CorsPolicy;
use firemebot_app::AppContext;
use firemebot_errors::AppError;
use serde_json::json;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Larger roast bodies are read as empty.
const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn build_router(ctx: AppContext) -> Router {
    let cors_policy = ctx.cors_policy.clone();

    let router = Router::new()
        .route("/", get(health))
        .route("/api/roast", post(roast))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(ctx);

    with_middleware(router, cors_policy)
}

/// Wraps `router` in the response pipeline shared by every route: panic
/// catcher, CORS, request tracing, compression, and security headers.
pub fn with_middleware(router: Router, cors_policy: Arc<CorsPolicy>) -> Router {
    router
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(axum::middleware::from_fn_with_state(
            cors_policy,
            middleware::cors,
        ))
        .layer(TraceLayer::new_for_http().make_span_with(middleware::make_request_span))
        .layer(CompressionLayer::new())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("same-origin"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
        ))
}

async fn health() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(json!({ "ok": true, "name": "firemebot-api", "msg": "API is alive." })),
    )
}

async fn roast(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
    body: Body,
) -> Result<Json<RoastEnvelope>, AppError> {
    let client_ip = client_ip(&headers);
    let body = to_bytes(body, MAX_BODY_BYTES).await.unwrap_or_else(|e| {
        tracing::warn!("Unreadable roast body: {}", e);
        Bytes::new()
    });

    match ctx.generate_roast.handle(&body, client_ip.as_deref()).await {
        Ok(envelope) => {
            tracing::info!("Roasted {:?}", envelope.title);
            Ok(Json(envelope))
        }
        Err(e) => {
            if e.status() < 500 {
                tracing::info!("Rejected roast request: {:?} ({})", e.code(), e);
            }
            Err(e)
        }
    }
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

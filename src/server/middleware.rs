//! Request middleware: preflight answers, cross-origin headers and request
//! logging.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tower::ServiceBuilder;
use tower::layer::util::{Identity, Stack};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::Instrument;

/// Methods advertised to cross-origin callers
pub const ALLOWED_METHODS: &str = "GET,POST,OPTIONS";

/// Request headers advertised to cross-origin callers
pub const ALLOWED_HEADERS: &str = "Content-Type";

type CorsHeaders = Stack<
    SetResponseHeaderLayer<HeaderValue>,
    Stack<
        SetResponseHeaderLayer<HeaderValue>,
        Stack<SetResponseHeaderLayer<HeaderValue>, Identity>,
    >,
>;

/// Layer that stamps the permissive cross-origin headers onto every
/// response, errors included.
pub fn cors_headers() -> ServiceBuilder<CorsHeaders> {
    ServiceBuilder::new()
        .layer(allow(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(allow(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(allow(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
}

fn allow(name: HeaderName, value: HeaderValue) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, value)
}

/// Answer `OPTIONS` on any path with an empty 204.
pub async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }
    next.run(request).await
}

/// Run each request inside an `http.request` span and log how it ended.
pub async fn log_request(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "http.request",
        method = %request.method(),
        path = %request.uri().path(),
    );
    let started = Instant::now();

    let response = next.run(request).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::debug!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );
    });
    response
}

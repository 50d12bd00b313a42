//! Request correlation middleware.
//!
//! Tags each request with an id (the caller's `x-request-id` if present, a
//! fresh UUID otherwise), runs it inside a tracing span carrying that id and
//! echoes the id back on the response.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

fn request_id_of(request: &Request) -> HeaderValue {
    request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .filter(|v| v.to_str().is_ok_and(|s| !s.is_empty()))
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        })
}

pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request_id_of(&request);
    let span = tracing::info_span!(
        "request",
        request_id = request_id.to_str().unwrap_or_default(),
        method = %request.method(),
        uri = %request.uri(),
    );

    async move {
        let started = Instant::now();
        let mut response = next.run(request).await;

        tracing::info!(
            status = response.status().as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "Request completed"
        );

        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), request_id);
        response
    }
    .instrument(span)
    .await
}

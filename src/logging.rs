//! Middleware for logging requests and responses.

use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};

/// How many bytes of a body are logged at the `info` level before truncation.
const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log each request and its response, including the JSON bodies.
///
/// Bodies are logged at the `info` level, truncated to
/// [LOG_BODY_LENGTH_LIMIT] bytes. Truncated bodies are logged in full at the
/// `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let request_body = read_body(body).await;

    tracing::info!(
        method = %parts.method,
        uri = %parts.uri,
        body = truncated(&request_body),
        "received request"
    );
    if request_body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::debug!("full request body: {request_body:?}");
    }

    let started_at = Instant::now();
    let response = next.run(Request::from_parts(parts, request_body.into())).await;

    let (parts, body) = response.into_parts();
    let response_body = read_body(body).await;

    tracing::info!(
        status = %parts.status,
        elapsed = ?started_at.elapsed(),
        body = truncated(&response_body),
        "sending response"
    );
    if response_body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::debug!("full response body: {response_body:?}");
    }

    Response::from_parts(parts, response_body.into())
}

async fn read_body(body: Body) -> String {
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    String::from_utf8_lossy(&body_bytes).to_string()
}

fn truncated(body: &str) -> &str {
    let end = body
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| i > LOG_BODY_LENGTH_LIMIT)
        .unwrap_or(body.len());

    &body[..end]
}

use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

/// GET /api/healthz
/// Response: 200 OK, plain text
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}

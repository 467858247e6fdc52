use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{Html, IntoResponse, Response},
};

/// Counts every request to the static file server.
pub async fn count_hits(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.record_hit();
    next.run(request).await
}

/// GET /admin/metrics
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>

<body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
</body>

</html>
"#,
        state.hit_count()
    ))
}

/// GET /api/reset
pub async fn reset(State(state): State<AppState>) -> impl IntoResponse {
    state.reset_hits();
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Counter reset",
    )
}

pub mod admin;
pub mod chirp;
pub mod health;
pub mod user;

use crate::{errors::ApiError, states::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::warn;
use validator::ValidationErrors;

/// Builds the full router. Files under `static_root` are served at `/app`
/// and counted by the hit counter.
pub fn router(state: AppState, static_root: impl AsRef<Path>) -> Router {
    let file_server = ServiceBuilder::new()
        .layer(middleware::from_fn_with_state(state.clone(), admin::count_hits))
        .service(ServeDir::new(static_root.as_ref()));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/healthz", get(health::healthz))
        .route("/admin/metrics", get(admin::metrics))
        .route("/api/reset", get(admin::reset))
        .route("/api/chirps", post(chirp::create_chirp).get(chirp::get_chirps))
        .route("/api/chirps/{chirp_id}", get(chirp::get_chirp))
        .route("/api/users", post(user::create_user).put(user::update_user))
        .route("/api/login", post(user::login))
        .nest_service("/app", file_server)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Runs store and bcrypt work on the blocking pool.
pub(crate) async fn blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ApiError::InternalError(format!("Blocking task failed: {}", e)))?
}

/// Reports the first custom message, e.g. `Chirp is too long`.
pub(crate) fn validation_error(errors: ValidationErrors) -> ApiError {
    let message = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string());

    warn!("Rejected request: {}", message);
    ApiError::ValidationError(message)
}

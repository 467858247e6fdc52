use crate::{
    AppState,
    dto::CreateChirpRequest,
    errors::ApiError,
    filter::clean_body,
    models::{Post, PostId},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

use super::{blocking, validation_error};

/// POST /api/chirps
/// Body: { "body": "..." }
pub async fn create_chirp(
    State(state): State<AppState>,
    Json(payload): Json<CreateChirpRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    payload.validate().map_err(validation_error)?;

    let body = clean_body(&payload.body);
    let posts = state.posts.clone();
    let post = blocking(move || Ok(posts.create(body)?)).await?;

    info!("Chirp created: {}", post.id);

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/chirps
/// Ascending by id.
pub async fn get_chirps(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.posts.clone();
    let chirps = blocking(move || Ok(posts.list()?)).await?;

    Ok(Json(chirps))
}

/// GET /api/chirps/{chirp_id}
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<Json<Post>, ApiError> {
    let posts = state.posts.clone();
    let chirp = blocking(move || Ok(posts.get_by_id(id)?)).await?;

    Ok(Json(chirp))
}

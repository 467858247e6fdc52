use crate::{
    AppState,
    auth::{create_token, hash_password, token_lifetime, validate_token, verify_password},
    dto::{LoginRequest, LoginResponse, UserCredentialsRequest, UserResponse},
    errors::ApiError,
    repo::RepoError,
};
use axum::{Json, extract::State, http::HeaderMap, http::StatusCode};
use tracing::{info, warn};
use validator::Validate;

use super::{blocking, validation_error};

/// POST /api/users
/// Body: { "email": "...", "password": "..." }
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserCredentialsRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    payload.validate().map_err(validation_error)?;

    let users = state.users.clone();
    let user = blocking(move || {
        let hashed_password = hash_password(&payload.password)?;
        Ok(users.create(&payload.email, &hashed_password)?)
    })
    .await?;

    info!("New user registered: {}", user.email);

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /api/users
/// Headers: Authorization: Bearer <token>
/// Body: { "email": "...", "password": "..." }
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UserCredentialsRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let claims = validate_token(&headers, &state.jwt_secret)?;
    let user_id = claims.user_id()?;

    payload.validate().map_err(validation_error)?;

    let users = state.users.clone();
    let user = blocking(move || {
        let hashed_password = hash_password(&payload.password)?;
        Ok(users.update(user_id, &payload.email, &hashed_password)?)
    })
    .await?;

    info!("User updated: {}", user.id);

    Ok(Json(user.into()))
}

/// POST /api/login
/// Body: { "email": "...", "password": "...", "expires_in_seconds": 3600 }
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let lifetime = token_lifetime(payload.expires_in_seconds);
    let users = state.users.clone();
    let user = blocking(move || {
        let user = match users.get_by_email(&payload.email) {
            Ok(user) => user,
            Err(RepoError::UserNotFound(_)) => return Err(ApiError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };

        // Verify password
        if !verify_password(&payload.password, &user.password_hash) {
            warn!("Failed login for user {}", user.id);
            return Err(ApiError::InvalidCredentials);
        }
        Ok(user)
    })
    .await?;

    // Generate token
    let token = create_token(user.id, &state.jwt_secret, lifetime)?;

    info!("User logged in: {}", user.email);

    Ok(Json(LoginResponse {
        id: user.id,
        email: user.email,
        token,
    }))
}

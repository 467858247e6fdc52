use crate::filter::MAX_CHIRP_LENGTH;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Validate, Deserialize)]
pub struct CreateChirpRequest {
    #[validate(length(max = MAX_CHIRP_LENGTH, message = "Chirp is too long"))]
    pub body: String,
}

/// Used for both `POST /api/users` and `PUT /api/users`.
#[derive(Debug, Validate, Deserialize)]
pub struct UserCredentialsRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    // bcrypt only looks at the first 72 bytes
    #[validate(length(min = 1, max = 72, message = "Password must be 1-72 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub expires_in_seconds: Option<i64>,
}

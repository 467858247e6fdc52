use serde::{Deserialize, Serialize};

pub type UserId = u64;

/// A user account as persisted. The bcrypt hash is stored under `password`,
/// so never hand this struct straight to a response; use `UserResponse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}

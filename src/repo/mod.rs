//! Typed views over the [`Store`](crate::store::Store).
//!
//! Each mutation is one `Store::update` call, so the id computation, the
//! uniqueness check and the write all happen under the same write lock.

pub mod post;
pub mod user;

use crate::models::{PostId, UserId};
use crate::store::StoreError;
use thiserror::Error;

pub use post::PostRepository;
pub use user::UserRepository;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("chirp {0} not found")]
    PostNotFound(PostId),

    #[error("user {0} not found")]
    UserNotFound(String),

    #[error("email {0} is already registered")]
    DuplicateEmail(String),
}

impl RepoError {
    pub fn user_not_found_by_id(id: UserId) -> Self {
        Self::UserNotFound(format!("#{id}"))
    }
}

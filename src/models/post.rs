use serde::{Deserialize, Serialize};

pub type PostId = u64;

/// A chirp. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub body: String,
}

use super::{Post, PostId, User, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The whole persisted state, read and rewritten as one unit.
///
/// serde_json writes integer map keys as strings (`{"1": {...}}`) and parses
/// them back into integers on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "chirps", alias = "posts", default)]
    pub posts: BTreeMap<PostId, Post>,
    #[serde(default)]
    pub users: BTreeMap<UserId, User>,
}

impl Document {
    pub fn next_post_id(&self) -> PostId {
        next_id(self.posts.keys())
    }

    pub fn next_user_id(&self) -> UserId {
        next_id(self.users.keys())
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|user| user.email == email)
    }
}

// max + 1, starting at 1; id 0 is never handed out
fn next_id<'a>(ids: impl Iterator<Item = &'a u64>) -> u64 {
    ids.max().copied().unwrap_or(0) + 1
}

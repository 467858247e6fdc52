use super::{RepoError, RepoResult};
use crate::models::{Post, PostId};
use crate::store::Store;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct PostRepository {
    store: Arc<Store>,
}

impl PostRepository {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn create(&self, body: impl Into<String>) -> RepoResult<Post> {
        let body = body.into();
        self.store.update(|doc| {
            let id = doc.next_post_id();
            let post = Post { id, body };
            doc.posts.insert(id, post.clone());
            Ok(post)
        })
    }

    /// All chirps, ascending by id.
    pub fn list(&self) -> RepoResult<Vec<Post>> {
        let doc = self.store.load()?;
        Ok(doc.posts.into_values().collect())
    }

    pub fn get_by_id(&self, id: PostId) -> RepoResult<Post> {
        let mut doc = self.store.load()?;
        doc.posts.remove(&id).ok_or(RepoError::PostNotFound(id))
    }
}

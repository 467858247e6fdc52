use crate::repo::{PostRepository, UserRepository};
use crate::store::Store;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Cloned into every handler. The repositories share one `Arc<Store>`, which
/// is the only mutable state besides the hit counter.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostRepository,
    pub users: UserRepository,
    pub jwt_secret: String,
    pub hits: Arc<AtomicUsize>,
}

impl AppState {
    pub fn new(store: Arc<Store>, jwt_secret: impl Into<String>) -> Self {
        Self {
            posts: PostRepository::new(Arc::clone(&store)),
            users: UserRepository::new(store),
            jwt_secret: jwt_secret.into(),
            hits: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn reset_hits(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}

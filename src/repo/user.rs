use super::{RepoError, RepoResult};
use crate::models::{User, UserId};
use crate::store::Store;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct UserRepository {
    store: Arc<Store>,
}

impl UserRepository {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Stores a new user. Email matching is exact and case-sensitive.
    pub fn create(&self, email: &str, password_hash: &str) -> RepoResult<User> {
        self.store.update(|doc| {
            if doc.find_user_by_email(email).is_some() {
                return Err(RepoError::DuplicateEmail(email.to_string()));
            }

            let id = doc.next_user_id();
            let user = User {
                id,
                email: email.to_string(),
                password_hash: password_hash.to_string(),
            };
            doc.users.insert(id, user.clone());
            Ok(user)
        })
    }

    pub fn list(&self) -> RepoResult<Vec<User>> {
        let doc = self.store.load()?;
        Ok(doc.users.into_values().collect())
    }

    pub fn get_by_id(&self, id: UserId) -> RepoResult<User> {
        let mut doc = self.store.load()?;
        doc.users
            .remove(&id)
            .ok_or_else(|| RepoError::user_not_found_by_id(id))
    }

    pub fn get_by_email(&self, email: &str) -> RepoResult<User> {
        let doc = self.store.load()?;
        doc.find_user_by_email(email)
            .cloned()
            .ok_or_else(|| RepoError::UserNotFound(email.to_string()))
    }

    /// Replaces a user's email and password hash in one write.
    pub fn update(&self, id: UserId, email: &str, password_hash: &str) -> RepoResult<User> {
        self.store.update(|doc| {
            if doc
                .find_user_by_email(email)
                .is_some_and(|other| other.id != id)
            {
                return Err(RepoError::DuplicateEmail(email.to_string()));
            }

            let user = doc
                .users
                .get_mut(&id)
                .ok_or_else(|| RepoError::user_not_found_by_id(id))?;
            user.email = email.to_string();
            user.password_hash = password_hash.to_string();
            Ok(user.clone())
        })
    }
}

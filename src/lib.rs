//! Chirpy: a small microblog API whose database is a single JSON file.
//!
//! The `store` module owns the file and its locking; `repo` layers typed
//! chirp and user operations on top; `routes` exposes them over HTTP.

pub mod auth;
pub mod config;
pub mod dto;
pub mod errors;
pub mod filter;
pub mod models;
pub mod repo;
pub mod routes;
pub mod states;
pub mod store;

pub use config::Config;
pub use routes::router;
pub use states::AppState;
pub use store::{Store, StoreError};

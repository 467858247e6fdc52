mod document;
mod post;
mod user;

pub use document::Document;
pub use post::{Post, PostId};
pub use user::{User, UserId};

mod requests;
mod responses;

pub use requests::{CreateChirpRequest, LoginRequest, UserCredentialsRequest};
pub use responses::{LoginResponse, UserResponse};

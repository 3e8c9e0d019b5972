//! HTTP adapter for authentication endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CredentialsRequest, SessionResponse, SessionTokenResponse, VerificationCodeRequest,
    VerifyRequest,
};
pub use handlers::AuthHandlers;
pub use routes::auth_routes;

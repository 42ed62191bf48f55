//! Authentication error types.

use baaham_core::error::BaahamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for BaahamError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_) => BaahamError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::Crypto(msg) => BaahamError::Crypto(msg),
        }
    }
}

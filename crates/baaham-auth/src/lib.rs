//! Baaham Auth — password hashing, JWT issuance/validation and the
//! login service.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use password::{Argon2Hasher, PasswordHasher};
pub use service::{AuthService, LoginInput, LoginOutput};
pub use token::AccessTokenClaims;

//! Authentication configuration.

/// Configuration for the authentication service.
///
/// Token lifetime is not configurable; see
/// [`crate::token::ACCESS_TOKEN_TTL_SECS`].
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Shared HMAC secret used to sign and verify access tokens.
    pub jwt_secret: Vec<u8>,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
        }
    }
}

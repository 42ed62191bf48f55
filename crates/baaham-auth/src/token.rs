//! JWT access token issuance and verification (HS256).
//!
//! Tokens are self-contained: nothing is recorded server-side, and a
//! token stays valid until `exp` even if the account changes.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthError;

/// Lifetime of every access token: 24 hours, in seconds.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// JWT claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject — user ID (UUID string).
    pub user_id: String,
    pub username: String,
    pub is_admin: bool,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Not-before (Unix timestamp), always equal to `iat`.
    pub nbf: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Issue a signed HS256 JWT access token valid for
/// [`ACCESS_TOKEN_TTL_SECS`] from now.
pub fn issue_access_token(
    user_id: Uuid,
    username: &str,
    is_admin: bool,
    secret: &[u8],
) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = AccessTokenClaims {
        user_id: user_id.to_string(),
        username: username.to_string(),
        is_admin,
        iat: now,
        nbf: now,
        exp: now + ACCESS_TOKEN_TTL_SECS,
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Decode and verify an HS256 JWT access token.
///
/// A token is accepted iff the signature matches, `nbf <= now` and
/// `now < exp`. No clock leeway is granted.
pub fn decode_access_token(token: &str, secret: &[u8]) -> Result<AccessTokenClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp", "iat", "nbf"]);
    validation.validate_nbf = true;
    validation.leeway = 0;

    jsonwebtoken::decode::<AccessTokenClaims>(
        token,
        &DecodingKey::from_secret(secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::TokenInvalid(e.to_string()),
    })
}

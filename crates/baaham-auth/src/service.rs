//! Authentication service — login orchestration.
//!
//! Every rejection (unknown user, wrong password, unreadable hash,
//! storage failure during lookup) leaves this module as the same
//! [`AuthError::InvalidCredentials`], so callers cannot tell whether a
//! username exists. The distinct causes only reach the logs.

use std::sync::Arc;

use baaham_core::error::{BaahamError, BaahamResult};
use baaham_core::repository::UserRepository;
use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password::PasswordHasher;
use crate::token;

/// Input for the login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed JWT access token.
    pub access_token: String,
}

/// Authentication service.
///
/// Generic over the repository and hasher so that the auth layer has no
/// dependency on the database crate and both can be swapped for test
/// doubles.
pub struct AuthService<U: UserRepository, H: PasswordHasher> {
    user_repo: U,
    hasher: Arc<H>,
    config: AuthConfig,
}

impl<U: UserRepository, H: PasswordHasher + 'static> AuthService<U, H> {
    pub fn new(user_repo: U, hasher: H, config: AuthConfig) -> Self {
        Self {
            user_repo,
            hasher: Arc::new(hasher),
            config,
        }
    }

    /// Authenticate a user with username + password and issue an
    /// access token.
    pub async fn login(&self, input: LoginInput) -> BaahamResult<LoginOutput> {
        // 1. Look up user.
        let user = match self.user_repo.get_by_username(&input.username).await {
            Ok(u) => u,
            Err(BaahamError::NotFound { .. }) => {
                info!(username = %input.username, "Login rejected: unknown user");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => {
                warn!(username = %input.username, error = %e, "Login rejected: user lookup failed");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        // 2. Verify password off the async workers; Argon2 is slow on purpose.
        let hasher = Arc::clone(&self.hasher);
        let password = input.password;
        let password_hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
            .await
            .map_err(|e| BaahamError::Internal(format!("password verification task: {e}")))?;

        if !valid {
            info!(username = %user.username, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        // 3. Issue JWT access token.
        let access_token = token::issue_access_token(
            user.id,
            &user.username,
            user.is_admin,
            &self.config.jwt_secret,
        )?;

        info!(username = %user.username, "Login succeeded");

        Ok(LoginOutput { access_token })
    }
}

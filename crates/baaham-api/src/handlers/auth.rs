//! `POST /api/v1/auth/login`.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use baaham_auth::password::PasswordHasher;
use baaham_auth::service::{AuthService, LoginInput};
use baaham_core::error::BaahamError;
use baaham_core::repository::UserRepository;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Both fields are required and must be non-empty.
    fn into_input(self) -> Result<LoginInput, BaahamError> {
        if self.username.is_empty() {
            return Err(BaahamError::Validation {
                message: "username is required".into(),
            });
        }
        if self.password.is_empty() {
            return Err(BaahamError::Validation {
                message: "password is required".into(),
            });
        }
        Ok(LoginInput {
            username: self.username,
            password: self.password,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

pub async fn login<U, H>(
    State(svc): State<Arc<AuthService<U, H>>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Rejected malformed login request");
        ApiError::BadRequest
    })?;

    let output = svc.login(request.into_input()?).await?;

    Ok(Json(LoginResponse {
        token: output.access_token,
    }))
}

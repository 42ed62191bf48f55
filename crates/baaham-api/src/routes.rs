//! Route table.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use baaham_auth::password::PasswordHasher;
use baaham_auth::service::AuthService;
use baaham_core::health::HealthService;
use baaham_core::repository::{HealthRepository, UserRepository};

use crate::handlers::{auth, health};

/// Build the full `/api/v1` router from already-composed services.
pub fn router<U, H, R>(auth: Arc<AuthService<U, H>>, health: Arc<HealthService<R>>) -> Router
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    R: HealthRepository + 'static,
{
    let auth_routes = Router::new()
        .route("/auth/login", post(auth::login::<U, H>))
        .with_state(auth);

    let health_routes = Router::new()
        .route("/health", get(health::health_check::<R>))
        .with_state(health);

    Router::new().nest("/api/v1", auth_routes.merge(health_routes))
}

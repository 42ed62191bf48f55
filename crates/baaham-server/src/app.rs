//! Composition root: repositories → services → router.

use std::sync::Arc;

use axum::Router;
use baaham_auth::error::AuthError;
use baaham_auth::service::AuthService;
use baaham_core::health::HealthService;
use baaham_db::repository::{SurrealHealthRepository, SurrealUserRepository};
use surrealdb::{Connection, Surreal};

use crate::config::AppConfig;

/// Wire every layer onto one SurrealDB handle and return the HTTP app.
pub fn compose<C: Connection>(db: Surreal<C>, config: &AppConfig) -> Result<Router, AuthError> {
    let user_repo = SurrealUserRepository::new(db.clone());
    let health_repo = SurrealHealthRepository::new(db);

    let auth = AuthService::new(user_repo, config.hasher()?, config.auth_config());
    let health = HealthService::new(health_repo);

    Ok(baaham_api::router(Arc::new(auth), Arc::new(health)))
}

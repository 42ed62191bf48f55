//! SurrealDB implementation of [`HealthRepository`].

use baaham_core::error::BaahamResult;
use baaham_core::repository::HealthRepository;
use surrealdb::{Connection, Surreal};

use crate::error::DbError;

#[derive(Clone)]
pub struct SurrealHealthRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealHealthRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> HealthRepository for SurrealHealthRepository<C> {
    async fn check(&self) -> BaahamResult<bool> {
        self.db.health().await.map_err(DbError::from)?;
        Ok(true)
    }
}

//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Services are generic over these
//! traits so that no layer above storage depends on the database crate.

use crate::error::BaahamResult;
use crate::models::user::{CreateUser, User};

pub trait UserRepository: Send + Sync {
    /// Insert a new account. A taken username yields
    /// [`BaahamError::AlreadyExists`](crate::error::BaahamError::AlreadyExists).
    fn create(&self, input: CreateUser) -> impl Future<Output = BaahamResult<User>> + Send;
    fn get_by_username(&self, username: &str) -> impl Future<Output = BaahamResult<User>> + Send;
    /// All accounts, oldest first.
    fn list(&self) -> impl Future<Output = BaahamResult<Vec<User>>> + Send;
    /// Replace the stored hash and bump `updated_at`.
    fn update_password(
        &self,
        username: &str,
        password_hash: String,
    ) -> impl Future<Output = BaahamResult<()>> + Send;
    /// Hard delete.
    fn delete(&self, username: &str) -> impl Future<Output = BaahamResult<()>> + Send;
}

pub trait HealthRepository: Send + Sync {
    /// `Ok(true)` when the backing store answers.
    fn check(&self) -> impl Future<Output = BaahamResult<bool>> + Send;
}

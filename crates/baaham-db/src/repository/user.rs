//! SurrealDB implementation of [`UserRepository`].
//!
//! The repository stores whatever hash it is handed; hashing happens in
//! the auth layer. Username uniqueness is enforced by the
//! `idx_user_username` index, not by a read-before-write.

use baaham_core::error::BaahamResult;
use baaham_core::models::user::{CreateUser, User};
use baaham_core::repository::UserRepository;
use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;
use crate::schema::USERNAME_INDEX;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct UserRow {
    username: String,
    password_hash: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct UserRowWithId {
    record_id: String,
    username: String,
    password_hash: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self, id: Uuid) -> User {
        User {
            id,
            username: self.username,
            password_hash: self.password_hash,
            is_admin: self.is_admin,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl UserRowWithId {
    fn try_into_user(self) -> Result<User, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::InvalidRecord(format!("invalid UUID: {e}")))?;
        Ok(User {
            id,
            username: self.username,
            password_hash: self.password_hash,
            is_admin: self.is_admin,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Minimal projection for statements that only need to know whether a
/// row was touched.
#[derive(Debug, SurrealValue)]
struct UsernameRow {
    #[allow(dead_code)]
    username: String,
}

// e.g. "Database index `idx_user_username` already contains 'alice', with record ..."
fn is_username_conflict(msg: &str) -> bool {
    msg.contains(USERNAME_INDEX) && msg.contains("already contains")
}

fn not_found(username: &str) -> DbError {
    DbError::NotFound {
        entity: "user".into(),
        id: format!("username={username}"),
    }
}

/// SurrealDB implementation of the User repository.
#[derive(Clone)]
pub struct SurrealUserRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealUserRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> UserRepository for SurrealUserRepository<C> {
    async fn create(&self, input: CreateUser) -> BaahamResult<User> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('user', $id) SET \
                 username = $username, \
                 password_hash = $password_hash, \
                 is_admin = $is_admin",
            )
            .bind(("id", id_str.clone()))
            .bind(("username", input.username))
            .bind(("password_hash", input.password_hash))
            .bind(("is_admin", input.is_admin))
            .await
            .map_err(DbError::from)?;

        // The client surfaces index violations only as text; the
        // duplicate_username_is_rejected test breaks if the wording moves.
        let mut result = result.check().map_err(|e| {
            let msg = e.to_string();
            if is_username_conflict(&msg) {
                DbError::AlreadyExists {
                    entity: "user".into(),
                }
            } else {
                DbError::Query(msg)
            }
        })?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "user".into(),
            id: id_str,
        })?;

        Ok(row.into_user(id))
    }

    async fn get_by_username(&self, username: &str) -> BaahamResult<User> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM user \
                 WHERE username = $username",
            )
            .bind(("username", username.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| not_found(username))?;

        Ok(row.try_into_user()?)
    }

    async fn list(&self) -> BaahamResult<Vec<User>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM user \
                 ORDER BY created_at ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;

        let users = rows
            .into_iter()
            .map(|row| row.try_into_user())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(users)
    }

    async fn update_password(&self, username: &str, password_hash: String) -> BaahamResult<()> {
        let result = self
            .db
            .query(
                "UPDATE user SET \
                 password_hash = $password_hash, updated_at = time::now() \
                 WHERE username = $username",
            )
            .bind(("password_hash", password_hash))
            .bind(("username", username.to_string()))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<UsernameRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(not_found(username).into());
        }

        Ok(())
    }

    async fn delete(&self, username: &str) -> BaahamResult<()> {
        let result = self
            .db
            .query("DELETE user WHERE username = $username RETURN BEFORE")
            .bind(("username", username.to_string()))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<UsernameRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(not_found(username).into());
        }

        Ok(())
    }
}

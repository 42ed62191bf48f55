//! User administration commands.
//!
//! Each command receives the [`CliContext`] built once in `main`, so the
//! repository and hasher are never reached through global state.

use std::io::Write;

use baaham_auth::error::AuthError;
use baaham_auth::password::PasswordHasher;
use baaham_core::error::BaahamError;
use baaham_core::models::user::CreateUser;
use baaham_core::repository::UserRepository;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(&'static str),

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error(transparent)]
    Domain(#[from] BaahamError),

    #[error(transparent)]
    Hashing(#[from] AuthError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct CliContext<U: UserRepository, H: PasswordHasher> {
    pub users: U,
    pub hasher: H,
}

impl<U: UserRepository, H: PasswordHasher> CliContext<U, H> {
    pub fn new(users: U, hasher: H) -> Self {
        Self { users, hasher }
    }

    pub async fn create(
        &self,
        out: &mut impl Write,
        username: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<(), CliError> {
        require(username, "username required")?;
        require(password, "password required")?;

        let created = self
            .users
            .create(CreateUser {
                username: username.to_string(),
                password_hash: self.hasher.hash(password)?,
                is_admin,
            })
            .await?;

        writeln!(
            out,
            "User created: {} (admin={}, id={})",
            created.username, created.is_admin, created.id
        )?;
        Ok(())
    }

    pub async fn list(&self, out: &mut impl Write) -> Result<(), CliError> {
        let users = self.users.list().await?;

        if users.is_empty() {
            writeln!(out, "There is no user in db.")?;
            return Ok(());
        }
        for u in users {
            writeln!(
                out,
                "{} | admin={} | created={}",
                u.username,
                u.is_admin,
                u.created_at.format("%Y-%m-%d")
            )?;
        }
        Ok(())
    }

    pub async fn change_password(
        &self,
        out: &mut impl Write,
        username: &str,
        password: &str,
    ) -> Result<(), CliError> {
        require(username, "username required")?;
        require(password, "password required")?;

        let hash = self.hasher.hash(password)?;
        self.users.update_password(username, hash).await?;

        writeln!(out, "User password updated.")?;
        Ok(())
    }

    pub async fn delete(&self, out: &mut impl Write, username: &str) -> Result<(), CliError> {
        require(username, "username required")?;

        self.users.delete(username).await?;

        writeln!(out, "User deleted.")?;
        Ok(())
    }
}

fn require(value: &str, message: &'static str) -> Result<(), CliError> {
    if value.is_empty() {
        Err(CliError::Usage(message))
    } else {
        Ok(())
    }
}

/// Prompt twice without echo and insist both entries agree.
pub fn prompt_new_password() -> Result<String, CliError> {
    let first = rpassword::prompt_password("New password: ")?;
    let second = rpassword::prompt_password("Confirm password: ")?;
    confirm(first, &second)
}

fn confirm(first: String, second: &str) -> Result<String, CliError> {
    if first != second {
        return Err(CliError::PasswordMismatch);
    }
    Ok(first)
}

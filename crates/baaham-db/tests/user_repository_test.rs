//! Integration tests for the User repository using in-memory SurrealDB.

use baaham_core::error::BaahamError;
use baaham_core::models::user::CreateUser;
use baaham_core::repository::{HealthRepository, UserRepository};
use baaham_db::repository::{SurrealHealthRepository, SurrealUserRepository};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    baaham_db::run_migrations(&db).await.unwrap();
    db
}

fn new_user(username: &str, is_admin: bool) -> CreateUser {
    CreateUser {
        username: username.into(),
        password_hash: format!("$argon2id$v=19$m=1024,t=1,p=1$fake${username}"),
        is_admin,
    }
}

#[tokio::test]
async fn create_and_get_user() {
    let repo = SurrealUserRepository::new(setup().await);

    let user = repo.create(new_user("alice", true)).await.unwrap();
    assert_eq!(user.username, "alice");
    assert!(user.is_admin);

    let fetched = repo.get_by_username("alice").await.unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.password_hash, user.password_hash);
    assert!(fetched.is_admin);
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let repo = SurrealUserRepository::new(setup().await);

    repo.create(new_user("alice", false)).await.unwrap();
    let err = repo.create(new_user("alice", true)).await.unwrap_err();

    assert!(
        matches!(err, BaahamError::AlreadyExists { .. }),
        "expected AlreadyExists, got: {err:?}"
    );
}

#[tokio::test]
async fn usernames_are_case_sensitive() {
    let repo = SurrealUserRepository::new(setup().await);

    repo.create(new_user("alice", false)).await.unwrap();
    repo.create(new_user("Alice", false)).await.unwrap();

    let err = repo.get_by_username("ALICE").await.unwrap_err();
    assert!(matches!(err, BaahamError::NotFound { .. }));
}

#[tokio::test]
async fn get_unknown_user_is_not_found() {
    let repo = SurrealUserRepository::new(setup().await);

    let err = repo.get_by_username("nobody").await.unwrap_err();
    assert!(matches!(err, BaahamError::NotFound { .. }));
}

#[tokio::test]
async fn list_returns_users_oldest_first() {
    let repo = SurrealUserRepository::new(setup().await);

    assert!(repo.list().await.unwrap().is_empty());

    repo.create(new_user("alice", true)).await.unwrap();
    repo.create(new_user("bob", false)).await.unwrap();
    repo.create(new_user("carol", false)).await.unwrap();

    let users = repo.list().await.unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, ["alice", "bob", "carol"]);
}

#[tokio::test]
async fn update_password_replaces_hash() {
    let repo = SurrealUserRepository::new(setup().await);
    let user = repo.create(new_user("alice", false)).await.unwrap();

    repo.update_password("alice", "$argon2id$new".into())
        .await
        .unwrap();

    let fetched = repo.get_by_username("alice").await.unwrap();
    assert_eq!(fetched.password_hash, "$argon2id$new");
    assert_eq!(fetched.id, user.id);
    assert!(fetched.updated_at >= user.updated_at);
}

#[tokio::test]
async fn update_password_unknown_user_is_not_found() {
    let repo = SurrealUserRepository::new(setup().await);

    let err = repo
        .update_password("nobody", "$argon2id$new".into())
        .await
        .unwrap_err();
    assert!(matches!(err, BaahamError::NotFound { .. }));
}

#[tokio::test]
async fn delete_removes_user() {
    let repo = SurrealUserRepository::new(setup().await);
    repo.create(new_user("alice", false)).await.unwrap();
    repo.create(new_user("bob", false)).await.unwrap();

    repo.delete("alice").await.unwrap();

    let err = repo.get_by_username("alice").await.unwrap_err();
    assert!(matches!(err, BaahamError::NotFound { .. }));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_unknown_user_is_not_found() {
    let repo = SurrealUserRepository::new(setup().await);

    let err = repo.delete("nobody").await.unwrap_err();
    assert!(matches!(err, BaahamError::NotFound { .. }));
}

#[tokio::test]
async fn deleted_username_can_be_reused() {
    let repo = SurrealUserRepository::new(setup().await);
    let first = repo.create(new_user("alice", false)).await.unwrap();

    repo.delete("alice").await.unwrap();
    let second = repo.create(new_user("alice", true)).await.unwrap();

    assert_ne!(first.id, second.id);
    assert!(second.is_admin);
}

#[tokio::test]
async fn health_check_reports_up() {
    let repo = SurrealHealthRepository::new(setup().await);
    assert!(repo.check().await.unwrap());
}

//! End-to-end tests of the composed application on in-memory SurrealDB.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use baaham_auth::password::PasswordHasher;
use baaham_auth::token;
use baaham_core::models::user::CreateUser;
use baaham_core::repository::UserRepository;
use baaham_db::repository::SurrealUserRepository;
use baaham_server::{AppConfig, app};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use tower::ServiceExt;

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.jwt.secret = "server-test-secret".into();
    config.hasher.memory_kib = 1024;
    config.hasher.iterations = 1;
    config
}

/// Compose the app and seed alice/s3cret through the same hasher the
/// CLI would use.
async fn setup() -> (Router, AppConfig) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    baaham_db::run_migrations(&db).await.unwrap();

    let config = test_config();
    SurrealUserRepository::new(db.clone())
        .create(CreateUser {
            username: "alice".into(),
            password_hash: config.hasher().unwrap().hash("s3cret").unwrap(),
            is_admin: false,
        })
        .await
        .unwrap();

    (app::compose(db, &config).unwrap(), config)
}

async fn login(app: Router, username: &str, password: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": username, "password": password }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn alice_scenario() {
    let (app, config) = setup().await;

    let (status, body) = login(app.clone(), "alice", "s3cret").await;
    assert_eq!(status, StatusCode::OK);
    let claims = token::decode_access_token(
        body["token"].as_str().unwrap(),
        config.jwt.secret.as_bytes(),
    )
    .unwrap();
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.exp - claims.iat, 86_400);

    let (status, wrong) = login(app.clone(), "alice", "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong, json!({ "error": "Wrong credentials" }));

    let (status, unknown) = login(app.clone(), "bob", "anything").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown, wrong);

    let (status, _) = login(app, "alice", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_is_up_on_live_store() {
    let (app, _) = setup().await;

    let request = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "healthy", "db": "up" }));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (app, _) = setup().await;

    let request = Request::builder()
        .uri("/api/v1/users")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

//! `GET /api/v1/health`.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use baaham_core::health::HealthService;
use baaham_core::repository::HealthRepository;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub db: String,
}

/// Always answers 200; storage state is carried in the body.
pub async fn health_check<R>(State(svc): State<Arc<HealthService<R>>>) -> Json<HealthResponse>
where
    R: HealthRepository + 'static,
{
    let (status, db) = if svc.check().await {
        ("healthy", "up")
    } else {
        ("unhealthy", "down")
    };

    Json(HealthResponse {
        status: status.into(),
        db: db.into(),
    })
}

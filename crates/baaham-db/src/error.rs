//! Database-specific error types and conversions.

use baaham_core::error::BaahamError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("SurrealDB {stage} failed: {reason}")]
    Connect { stage: &'static str, reason: String },

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Record already exists: {entity}")]
    AlreadyExists { entity: String },
}

impl From<DbError> for BaahamError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => BaahamError::NotFound { entity, id },
            DbError::AlreadyExists { entity } => BaahamError::AlreadyExists { entity },
            other => BaahamError::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_its_kind() {
        let err: BaahamError = DbError::NotFound {
            entity: "user".into(),
            id: "username=alice".into(),
        }
        .into();
        assert!(matches!(err, BaahamError::NotFound { entity, .. } if entity == "user"));
    }

    #[test]
    fn connect_errors_name_the_failed_stage() {
        let err = DbError::Connect {
            stage: "signin",
            reason: "bad credentials".into(),
        };
        assert!(err.to_string().starts_with("SurrealDB signin failed"));

        let err: BaahamError = err.into();
        assert!(matches!(err, BaahamError::Database(msg) if msg.contains("signin")));
    }

    #[test]
    fn query_errors_become_database_errors() {
        let err: BaahamError = DbError::Query("connection reset".into()).into();
        assert!(matches!(err, BaahamError::Database(msg) if msg.contains("connection reset")));
    }
}

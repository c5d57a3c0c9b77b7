//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresMedicationRepository` - Medication rows with array-typed schedules
//! - `PostgresDoseEventRepository` - One row per `(user, DoseKey)`, upserted
//! - `PostgresStoreHealth` - `SELECT 1` liveness probe

mod dose_event_repository;
mod medication_repository;

pub use dose_event_repository::PostgresDoseEventRepository;
pub use medication_repository::PostgresMedicationRepository;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::StoreHealth;

/// Maps a sqlx failure to a domain error.
///
/// Connection-level failures mean the store is unreachable and surface as
/// `StoreUnavailable`; everything else is a `DatabaseError`.
pub(crate) fn map_sqlx_error(context: &str, err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            DomainError::store_unavailable(format!("{}: {}", context, err))
        }
        other => DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, other)),
    }
}

/// Health probe for the Postgres backend.
#[derive(Clone)]
pub struct PostgresStoreHealth {
    pool: PgPool,
}

impl PostgresStoreHealth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealth for PostgresStoreHealth {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to ping database", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_store_unavailable() {
        let err = map_sqlx_error("Failed to fetch", sqlx::Error::PoolTimedOut);
        assert_eq!(err.code, ErrorCode::StoreUnavailable);
    }

    #[test]
    fn row_not_found_is_database_error() {
        let err = map_sqlx_error("Failed to fetch", sqlx::Error::RowNotFound);
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.starts_with("Failed to fetch"));
    }
}

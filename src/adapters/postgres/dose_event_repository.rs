//! PostgreSQL implementation of DoseEventRepository.
//!
//! The `DoseKey` is stored decomposed (`scheduled_date`, `scheduled_hour`,
//! `scheduled_minute`) and those columns, together with `user_id` and
//! `medication_id`, form the primary key. Upserts rely on that constraint.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};
use std::str::FromStr;

use crate::domain::dose::{DoseEvent, DoseKey, DoseStatus};
use crate::domain::foundation::{DomainError, ErrorCode, MedicationId, Timestamp, UserId};
use crate::ports::DoseEventRepository;

use super::map_sqlx_error;

/// PostgreSQL implementation of DoseEventRepository.
#[derive(Clone)]
pub struct PostgresDoseEventRepository {
    pool: PgPool,
}

impl PostgresDoseEventRepository {
    /// Creates a new PostgresDoseEventRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DoseEventRepository for PostgresDoseEventRepository {
    async fn find(
        &self,
        user_id: &UserId,
        key: &DoseKey,
    ) -> Result<Option<DoseEvent>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, medication_id, scheduled_date, scheduled_hour, scheduled_minute,
                   status, taken_at, snooze_until, updated_at
            FROM dose_events
            WHERE user_id = $1
              AND medication_id = $2
              AND scheduled_date = $3
              AND scheduled_hour = $4
              AND scheduled_minute = $5
            "#,
        )
        .bind(user_id.as_str())
        .bind(key.medication_id().as_uuid())
        .bind(key.date())
        .bind(key.hour() as i16)
        .bind(key.minute() as i16)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to fetch dose event", e))?;

        row.map(row_to_event).transpose()
    }

    async fn find_all_by_user(&self, user_id: &UserId) -> Result<Vec<DoseEvent>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, medication_id, scheduled_date, scheduled_hour, scheduled_minute,
                   status, taken_at, snooze_until, updated_at
            FROM dose_events
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to fetch dose events by user", e))?;

        rows.into_iter().map(row_to_event).collect()
    }

    async fn upsert(&self, event: &DoseEvent) -> Result<(), DomainError> {
        let key = event.key();
        sqlx::query(
            r#"
            INSERT INTO dose_events (
                user_id, medication_id, scheduled_date, scheduled_hour, scheduled_minute,
                status, taken_at, snooze_until, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id, medication_id, scheduled_date, scheduled_hour, scheduled_minute)
            DO UPDATE SET
                status = EXCLUDED.status,
                taken_at = EXCLUDED.taken_at,
                snooze_until = EXCLUDED.snooze_until,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(event.user_id().as_str())
        .bind(key.medication_id().as_uuid())
        .bind(key.date())
        .bind(key.hour() as i16)
        .bind(key.minute() as i16)
        .bind(event.status().as_str())
        .bind(event.taken_at().map(|t| *t.as_datetime()))
        .bind(event.snooze_until().map(|t| *t.as_datetime()))
        .bind(event.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to upsert dose event", e))?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to get {}: {}", column, e),
    )
}

fn str_to_dose_status(s: &str) -> Result<DoseStatus, DomainError> {
    DoseStatus::from_str(s).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid dose status: {}", s),
        )
    })
}

fn key_from_columns(
    medication_id: uuid::Uuid,
    date: NaiveDate,
    hour: i16,
    minute: i16,
) -> Result<DoseKey, DomainError> {
    let hour = u32::try_from(hour).ok();
    let minute = u32::try_from(minute).ok();
    hour.zip(minute)
        .and_then(|(h, m)| DoseKey::from_parts(MedicationId::from_uuid(medication_id), date, h, m))
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid stored dose time for medication {}", medication_id),
            )
        })
}

fn row_to_event(row: sqlx::postgres::PgRow) -> Result<DoseEvent, DomainError> {
    let user_id: String = row.try_get("user_id").map_err(|e| column_error("user_id", e))?;
    let medication_id: uuid::Uuid = row
        .try_get("medication_id")
        .map_err(|e| column_error("medication_id", e))?;
    let date: NaiveDate = row
        .try_get("scheduled_date")
        .map_err(|e| column_error("scheduled_date", e))?;
    let hour: i16 = row
        .try_get("scheduled_hour")
        .map_err(|e| column_error("scheduled_hour", e))?;
    let minute: i16 = row
        .try_get("scheduled_minute")
        .map_err(|e| column_error("scheduled_minute", e))?;
    let status: String = row.try_get("status").map_err(|e| column_error("status", e))?;
    let taken_at: Option<chrono::DateTime<chrono::Utc>> = row
        .try_get("taken_at")
        .map_err(|e| column_error("taken_at", e))?;
    let snooze_until: Option<chrono::DateTime<chrono::Utc>> = row
        .try_get("snooze_until")
        .map_err(|e| column_error("snooze_until", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| column_error("updated_at", e))?;

    Ok(DoseEvent::reconstitute(
        UserId::new(user_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
        })?,
        key_from_columns(medication_id, date, hour, minute)?,
        str_to_dose_status(&status)?,
        taken_at.map(Timestamp::from_datetime),
        snooze_until.map(Timestamp::from_datetime),
        Timestamp::from_datetime(updated_at),
    ))
}

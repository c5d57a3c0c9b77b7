//! PostgreSQL implementation of MedicationRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, MedicationId, Timestamp, UserId};
use crate::domain::medication::{Medication, WeeklySchedule};
use crate::ports::MedicationRepository;

use super::map_sqlx_error;

/// PostgreSQL implementation of MedicationRepository.
#[derive(Clone)]
pub struct PostgresMedicationRepository {
    pool: PgPool,
}

impl PostgresMedicationRepository {
    /// Creates a new PostgresMedicationRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MedicationRepository for PostgresMedicationRepository {
    async fn save(&self, medication: &Medication) -> Result<(), DomainError> {
        let days: Vec<i16> = medication
            .schedule()
            .days_of_week()
            .iter()
            .map(|d| i16::from(*d))
            .collect();

        sqlx::query(
            r#"
            INSERT INTO medications (
                id, user_id, name, dosage, pill_image_url, days_of_week, times, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(medication.id().as_uuid())
        .bind(medication.user_id().as_str())
        .bind(medication.name())
        .bind(medication.dosage())
        .bind(medication.pill_image_url())
        .bind(&days)
        .bind(medication.schedule().times())
        .bind(medication.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to insert medication", e))?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Medication>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, dosage, pill_image_url, days_of_week, times, created_at
            FROM medications
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to fetch medications by user", e))?;

        rows.into_iter().map(row_to_medication).collect()
    }

    async fn find_by_id(&self, id: &MedicationId) -> Result<Option<Medication>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, dosage, pill_image_url, days_of_week, times, created_at
            FROM medications
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to fetch medication", e))?;

        row.map(row_to_medication).transpose()
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

fn row_to_medication(row: sqlx::postgres::PgRow) -> Result<Medication, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let user_id: String = row.try_get("user_id").map_err(|e| column_error("user_id", e))?;
    let name: String = row.try_get("name").map_err(|e| column_error("name", e))?;
    let dosage: String = row.try_get("dosage").map_err(|e| column_error("dosage", e))?;
    let pill_image_url: Option<String> = row
        .try_get("pill_image_url")
        .map_err(|e| column_error("pill_image_url", e))?;
    let days: Vec<i16> = row
        .try_get("days_of_week")
        .map_err(|e| column_error("days_of_week", e))?;
    let times: Vec<String> = row.try_get("times").map_err(|e| column_error("times", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;

    let schedule = WeeklySchedule::new(days.into_iter().map(i64::from), times).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid stored schedule: {}", e),
        )
    })?;

    Ok(Medication::reconstitute(
        MedicationId::from_uuid(id),
        UserId::new(user_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
        })?,
        name,
        dosage,
        pill_image_url,
        schedule,
        Timestamp::from_datetime(created_at),
    ))
}

//! Medication aggregate entity.
//!
//! A medication belongs to one elder user and carries the weekly schedule
//! doses are resolved from. It is immutable once created.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MedicationId, Timestamp, UserId, ValidationError};

use super::WeeklySchedule;

/// Medication aggregate.
///
/// # Invariants
///
/// - `name` and `dosage` are non-empty
/// - `schedule` weekday indices are in `0..=6`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    id: MedicationId,
    user_id: UserId,
    name: String,
    dosage: String,
    pill_image_url: Option<String>,
    schedule: WeeklySchedule,
    created_at: Timestamp,
}

impl Medication {
    /// Create a new medication.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or dosage is blank
    pub fn new(
        id: MedicationId,
        user_id: UserId,
        name: String,
        dosage: String,
        pill_image_url: Option<String>,
        schedule: WeeklySchedule,
    ) -> Result<Self, ValidationError> {
        let name = name.trim().to_string();
        let dosage = dosage.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if dosage.is_empty() {
            return Err(ValidationError::empty_field("dosage"));
        }
        let pill_image_url = pill_image_url.filter(|url| !url.trim().is_empty());

        Ok(Self {
            id,
            user_id,
            name,
            dosage,
            pill_image_url,
            schedule,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a medication from persistence (no validation).
    pub fn reconstitute(
        id: MedicationId,
        user_id: UserId,
        name: String,
        dosage: String,
        pill_image_url: Option<String>,
        schedule: WeeklySchedule,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            dosage,
            pill_image_url,
            schedule,
            created_at,
        }
    }

    pub fn id(&self) -> &MedicationId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dosage(&self) -> &str {
        &self.dosage
    }

    pub fn pill_image_url(&self) -> Option<&str> {
        self.pill_image_url.as_deref()
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

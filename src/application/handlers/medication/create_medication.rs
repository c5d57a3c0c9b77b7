//! CreateMedicationHandler - Command handler for registering a medication.

use std::sync::Arc;

use crate::domain::foundation::{MedicationId, UserId};
use crate::domain::medication::{Medication, MedicationError, WeeklySchedule};
use crate::ports::MedicationRepository;

/// Command to register a medication for an elder user.
#[derive(Debug, Clone)]
pub struct CreateMedicationCommand {
    pub user_id: UserId,
    pub name: String,
    pub dosage: String,
    pub pill_image_url: Option<String>,
    /// Raw weekday indices; anything outside `0..=6` is rejected.
    pub days_of_week: Vec<i64>,
    /// Raw `HH:MM` entries, stored verbatim.
    pub times: Vec<String>,
}

/// Result of successful medication creation.
#[derive(Debug, Clone)]
pub struct CreateMedicationResult {
    pub medication: Medication,
}

/// Handler for creating medications.
pub struct CreateMedicationHandler {
    repository: Arc<dyn MedicationRepository>,
}

impl CreateMedicationHandler {
    pub fn new(repository: Arc<dyn MedicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateMedicationCommand,
    ) -> Result<CreateMedicationResult, MedicationError> {
        // 1. Validate schedule and build aggregate
        let schedule = WeeklySchedule::new(cmd.days_of_week, cmd.times)?;
        let medication = Medication::new(
            MedicationId::new(),
            cmd.user_id,
            cmd.name,
            cmd.dosage,
            cmd.pill_image_url,
            schedule,
        )?;

        let malformed = medication.schedule().malformed_times();
        if !malformed.is_empty() {
            tracing::warn!(
                medication_id = %medication.id(),
                ?malformed,
                "Medication has schedule times that will never resolve"
            );
        }

        // 2. Persist
        self.repository.save(&medication).await?;

        tracing::info!(
            medication_id = %medication.id(),
            user_id = %medication.user_id(),
            "Medication created"
        );

        Ok(CreateMedicationResult { medication })
    }
}

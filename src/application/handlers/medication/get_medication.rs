//! GetMedicationHandler - Query handler for a single medication.

use std::sync::Arc;

use crate::domain::foundation::{MedicationId, UserId};
use crate::domain::medication::{Medication, MedicationError};
use crate::ports::MedicationRepository;

/// Query for one of a user's medications.
#[derive(Debug, Clone)]
pub struct GetMedicationQuery {
    pub user_id: UserId,
    pub medication_id: MedicationId,
}

/// Handler for fetching a medication.
///
/// A medication owned by another user is reported as not found.
pub struct GetMedicationHandler {
    repository: Arc<dyn MedicationRepository>,
}

impl GetMedicationHandler {
    pub fn new(repository: Arc<dyn MedicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetMedicationQuery) -> Result<Medication, MedicationError> {
        self.repository
            .find_by_id(&query.medication_id)
            .await?
            .filter(|medication| medication.user_id() == &query.user_id)
            .ok_or(MedicationError::not_found(query.medication_id))
    }
}

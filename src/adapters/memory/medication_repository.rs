//! In-memory implementation of MedicationRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, MedicationId, UserId};
use crate::domain::medication::Medication;
use crate::ports::MedicationRepository;

/// Medications in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMedicationRepository {
    medications: Arc<RwLock<Vec<Medication>>>,
}

impl InMemoryMedicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored medications (useful for tests)
    pub async fn len(&self) -> usize {
        self.medications.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.medications.read().await.is_empty()
    }
}

#[async_trait]
impl MedicationRepository for InMemoryMedicationRepository {
    async fn save(&self, medication: &Medication) -> Result<(), DomainError> {
        let mut medications = self.medications.write().await;
        medications.retain(|m| m.id() != medication.id());
        medications.push(medication.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Medication>, DomainError> {
        let medications = self.medications.read().await;
        Ok(medications
            .iter()
            .filter(|m| m.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &MedicationId) -> Result<Option<Medication>, DomainError> {
        let medications = self.medications.read().await;
        Ok(medications.iter().find(|m| m.id() == id).cloned())
    }
}

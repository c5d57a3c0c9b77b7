//! ListMedicationsHandler - Query handler for a user's medications.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::medication::{Medication, MedicationError};
use crate::ports::MedicationRepository;

/// Query to list medications for a user.
#[derive(Debug, Clone)]
pub struct ListMedicationsQuery {
    pub user_id: UserId,
}

/// Handler for listing medications.
pub struct ListMedicationsHandler {
    repository: Arc<dyn MedicationRepository>,
}

impl ListMedicationsHandler {
    pub fn new(repository: Arc<dyn MedicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListMedicationsQuery) -> Result<Vec<Medication>, MedicationError> {
        let medications = self.repository.find_by_user(&query.user_id).await?;
        Ok(medications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryMedicationRepository;
    use crate::domain::foundation::MedicationId;
    use crate::domain::medication::WeeklySchedule;

    #[tokio::test]
    async fn lists_only_requested_user() {
        let repo = Arc::new(InMemoryMedicationRepository::new());
        for user in ["alice", "bob"] {
            let med = Medication::new(
                MedicationId::new(),
                UserId::new(user).unwrap(),
                format!("{}'s pill", user),
                "1 pill".to_string(),
                None,
                WeeklySchedule::daily(vec!["08:00".to_string()]),
            )
            .unwrap();
            repo.save(&med).await.unwrap();
        }

        let handler = ListMedicationsHandler::new(repo);
        let meds = handler
            .handle(ListMedicationsQuery {
                user_id: UserId::new("bob").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(meds.len(), 1);
        assert_eq!(meds[0].name(), "bob's pill");
    }

    #[tokio::test]
    async fn unknown_user_has_no_medications() {
        let handler = ListMedicationsHandler::new(Arc::new(InMemoryMedicationRepository::new()));
        let meds = handler
            .handle(ListMedicationsQuery {
                user_id: UserId::new("nobody").unwrap(),
            })
            .await
            .unwrap();
        assert!(meds.is_empty());
    }
}

//! MarkMissedHandler - Command handler recording a dose as missed.

use std::sync::Arc;

use crate::domain::dose::{DoseError, DoseEvent, DoseKey};
use crate::domain::foundation::{MedicationId, Timestamp, UserId};
use crate::ports::DoseEventRepository;

/// Command to mark one dose occurrence as missed.
#[derive(Debug, Clone)]
pub struct MarkMissedCommand {
    pub user_id: UserId,
    pub medication_id: MedicationId,
    pub scheduled_at: Timestamp,
    pub now: Timestamp,
}

/// Handler for marking doses missed.
///
/// The only producer of `Missed`; nothing marks doses missed in the
/// background.
pub struct MarkMissedHandler {
    events: Arc<dyn DoseEventRepository>,
}

impl MarkMissedHandler {
    pub fn new(events: Arc<dyn DoseEventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: MarkMissedCommand) -> Result<DoseEvent, DoseError> {
        let key = DoseKey::from_instant(cmd.medication_id, cmd.scheduled_at);
        let event = DoseEvent::missed(cmd.user_id, key, cmd.now);
        self.events.upsert(&event).await?;

        tracing::info!(
            user_id = %event.user_id(),
            dose = %key,
            "Dose marked missed"
        );

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{ts, user};
    use super::*;
    use crate::adapters::memory::InMemoryDoseEventRepository;
    use crate::domain::dose::DoseStatus;

    #[tokio::test]
    async fn missed_overwrites_taken_and_clears_timestamps() {
        let repo = Arc::new(InMemoryDoseEventRepository::new());
        let med = MedicationId::new();
        let key = DoseKey::from_instant(med, ts("2024-01-15T09:00:00Z"));
        repo.upsert(&DoseEvent::taken(user(), key, ts("2024-01-15T09:05:00Z")))
            .await
            .unwrap();

        MarkMissedHandler::new(repo.clone())
            .handle(MarkMissedCommand {
                user_id: user(),
                medication_id: med,
                scheduled_at: ts("2024-01-15T09:00:30Z"),
                now: ts("2024-01-15T23:00:00Z"),
            })
            .await
            .unwrap();

        let stored = repo.find(&user(), &key).await.unwrap().unwrap();
        assert_eq!(stored.status(), DoseStatus::Missed);
        assert!(stored.taken_at().is_none());
        assert!(stored.snooze_until().is_none());
        assert_eq!(stored.updated_at(), &ts("2024-01-15T23:00:00Z"));
    }
}

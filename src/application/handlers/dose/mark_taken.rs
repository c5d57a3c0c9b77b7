//! MarkTakenHandler - Command handler recording a dose as taken.

use std::sync::Arc;

use crate::domain::dose::{DoseError, DoseEvent, DoseKey};
use crate::domain::foundation::{MedicationId, Timestamp, UserId};
use crate::ports::DoseEventRepository;

/// Command to mark one dose occurrence as taken.
#[derive(Debug, Clone)]
pub struct MarkTakenCommand {
    pub user_id: UserId,
    pub medication_id: MedicationId,
    /// Any instant inside the scheduled minute.
    pub scheduled_at: Timestamp,
    pub now: Timestamp,
}

/// Handler for marking doses taken.
pub struct MarkTakenHandler {
    events: Arc<dyn DoseEventRepository>,
}

impl MarkTakenHandler {
    pub fn new(events: Arc<dyn DoseEventRepository>) -> Self {
        Self { events }
    }

    /// Upserts a `Taken` event. Repeating the call only moves `taken_at`.
    pub async fn handle(&self, cmd: MarkTakenCommand) -> Result<DoseEvent, DoseError> {
        let key = DoseKey::from_instant(cmd.medication_id, cmd.scheduled_at);
        let event = DoseEvent::taken(cmd.user_id, key, cmd.now);
        self.events.upsert(&event).await?;

        tracing::info!(
            user_id = %event.user_id(),
            dose = %key,
            "Dose marked taken"
        );

        Ok(event)
    }
}

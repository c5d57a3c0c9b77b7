//! GetTodayDosesHandler - Query handler for the "today" dose view.

use std::sync::Arc;

use crate::domain::dose::{DoseError, DoseResolver, DoseStatus};
use crate::domain::foundation::{MedicationId, Timestamp, UserId};
use crate::ports::{DoseEventRepository, MedicationRepository};

/// Query for the doses due on `now`'s UTC date.
#[derive(Debug, Clone)]
pub struct GetTodayDosesQuery {
    pub user_id: UserId,
    pub now: Timestamp,
}

/// A resolved dose with its effective status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayDose {
    pub medication_id: MedicationId,
    pub name: String,
    pub dosage: String,
    pub pill_image_url: Option<String>,
    pub scheduled_at: Timestamp,
    pub status: DoseStatus,
    pub taken_at: Option<Timestamp>,
    pub snooze_until: Option<Timestamp>,
}

/// Handler for the today view.
///
/// Read-only: a dose with no stored event is reported as `Pending` and
/// nothing is written back.
pub struct GetTodayDosesHandler {
    medications: Arc<dyn MedicationRepository>,
    events: Arc<dyn DoseEventRepository>,
}

impl GetTodayDosesHandler {
    pub fn new(
        medications: Arc<dyn MedicationRepository>,
        events: Arc<dyn DoseEventRepository>,
    ) -> Self {
        Self {
            medications,
            events,
        }
    }

    /// Doses sorted ascending by scheduled instant. Equal instants keep
    /// medication order, then schedule entry order.
    pub async fn handle(&self, query: GetTodayDosesQuery) -> Result<Vec<TodayDose>, DoseError> {
        let today = query.now.date();
        let medications = self.medications.find_by_user(&query.user_id).await?;

        let mut doses = Vec::new();
        for medication in &medications {
            for instance in DoseResolver::resolve_on(medication, today) {
                let event = self.events.find(&query.user_id, &instance.key).await?;
                let (status, taken_at, snooze_until) = match event {
                    Some(event) => (
                        event.status(),
                        event.taken_at().copied(),
                        event.snooze_until().copied(),
                    ),
                    None => (DoseStatus::Pending, None, None),
                };

                doses.push(TodayDose {
                    medication_id: *medication.id(),
                    name: medication.name().to_string(),
                    dosage: medication.dosage().to_string(),
                    pill_image_url: medication.pill_image_url().map(str::to_string),
                    scheduled_at: instance.scheduled_at(),
                    status,
                    taken_at,
                    snooze_until,
                });
            }
        }

        doses.retain(|dose| dose.scheduled_at.date() == today);
        doses.sort_by_key(|dose| dose.scheduled_at);

        tracing::debug!(
            user_id = %query.user_id,
            count = doses.len(),
            "Resolved today's doses"
        );

        Ok(doses)
    }
}

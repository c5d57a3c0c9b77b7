//! SnoozeDoseHandler - Command handler postponing a dose.

use std::sync::Arc;

use crate::domain::dose::{DoseError, DoseEvent, DoseKey, SnoozePolicy};
use crate::domain::foundation::{MedicationId, Timestamp, UserId};
use crate::ports::DoseEventRepository;

/// Command to snooze one dose occurrence.
#[derive(Debug, Clone)]
pub struct SnoozeDoseCommand {
    pub user_id: UserId,
    pub medication_id: MedicationId,
    pub scheduled_at: Timestamp,
    /// Requested delay; `None` uses the policy default.
    pub minutes: Option<i64>,
    pub now: Timestamp,
}

/// Result of a snooze.
#[derive(Debug, Clone)]
pub struct SnoozeDoseResult {
    pub event: DoseEvent,
    /// Effective delay after clamping.
    pub minutes: u32,
    pub snooze_until: Timestamp,
}

/// Handler for snoozing doses.
pub struct SnoozeDoseHandler {
    events: Arc<dyn DoseEventRepository>,
    policy: SnoozePolicy,
}

impl SnoozeDoseHandler {
    pub fn new(events: Arc<dyn DoseEventRepository>, policy: SnoozePolicy) -> Self {
        Self { events, policy }
    }

    /// Upserts a `Snoozed` event with `snooze_until = now + minutes`.
    pub async fn handle(&self, cmd: SnoozeDoseCommand) -> Result<SnoozeDoseResult, DoseError> {
        let minutes = self.policy.minutes_for(cmd.minutes);
        let snooze_until = cmd.now.plus_minutes(i64::from(minutes));

        let key = DoseKey::from_instant(cmd.medication_id, cmd.scheduled_at);
        let event = DoseEvent::snoozed(cmd.user_id, key, cmd.now, snooze_until);
        self.events.upsert(&event).await?;

        tracing::info!(
            user_id = %event.user_id(),
            dose = %key,
            minutes,
            "Dose snoozed"
        );

        Ok(SnoozeDoseResult {
            event,
            minutes,
            snooze_until,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{ts, user, UnavailableStore};
    use super::*;
    use crate::adapters::memory::InMemoryDoseEventRepository;
    use crate::domain::dose::DoseStatus;

    fn command(med: MedicationId, minutes: Option<i64>) -> SnoozeDoseCommand {
        SnoozeDoseCommand {
            user_id: user(),
            medication_id: med,
            scheduled_at: ts("2024-01-15T09:00:00Z"),
            minutes,
            now: ts("2024-01-15T09:00:00Z"),
        }
    }

    #[tokio::test]
    async fn default_snooze_is_fifteen_minutes() {
        let repo = Arc::new(InMemoryDoseEventRepository::new());
        let handler = SnoozeDoseHandler::new(repo.clone(), SnoozePolicy::default());
        let med = MedicationId::new();

        let result = handler.handle(command(med, None)).await.unwrap();

        assert_eq!(result.minutes, 15);
        assert_eq!(result.snooze_until, ts("2024-01-15T09:15:00Z"));
        let key = DoseKey::from_instant(med, ts("2024-01-15T09:00:00Z"));
        let stored = repo.find(&user(), &key).await.unwrap().unwrap();
        assert_eq!(stored.status(), DoseStatus::Snoozed);
        assert_eq!(stored.snooze_until(), Some(&ts("2024-01-15T09:15:00Z")));
    }

    #[tokio::test]
    async fn explicit_minutes_are_honored() {
        let handler = SnoozeDoseHandler::new(
            Arc::new(InMemoryDoseEventRepository::new()),
            SnoozePolicy::default(),
        );
        let result = handler
            .handle(command(MedicationId::new(), Some(30)))
            .await
            .unwrap();
        assert_eq!(result.snooze_until, ts("2024-01-15T09:30:00Z"));
    }

    #[tokio::test]
    async fn out_of_range_minutes_are_clamped() {
        let handler = SnoozeDoseHandler::new(
            Arc::new(InMemoryDoseEventRepository::new()),
            SnoozePolicy::default(),
        );

        let negative = handler
            .handle(command(MedicationId::new(), Some(-5)))
            .await
            .unwrap();
        assert_eq!(negative.minutes, 1);

        let huge = handler
            .handle(command(MedicationId::new(), Some(1_000_000)))
            .await
            .unwrap();
        assert_eq!(huge.minutes, 1440);
        assert_eq!(huge.snooze_until, ts("2024-01-16T09:00:00Z"));
    }

    #[tokio::test]
    async fn snoozing_a_taken_dose_clears_taken_at() {
        let repo = Arc::new(InMemoryDoseEventRepository::new());
        let med = MedicationId::new();
        let key = DoseKey::from_instant(med, ts("2024-01-15T09:00:00Z"));
        repo.upsert(&DoseEvent::taken(user(), key, ts("2024-01-15T08:59:00Z")))
            .await
            .unwrap();

        SnoozeDoseHandler::new(repo.clone(), SnoozePolicy::default())
            .handle(command(med, None))
            .await
            .unwrap();

        let stored = repo.find(&user(), &key).await.unwrap().unwrap();
        assert_eq!(stored.status(), DoseStatus::Snoozed);
        assert!(stored.taken_at().is_none());
    }

    #[tokio::test]
    async fn store_unavailable_propagates() {
        let handler = SnoozeDoseHandler::new(Arc::new(UnavailableStore), SnoozePolicy::default());
        let result = handler.handle(command(MedicationId::new(), None)).await;
        assert!(matches!(result, Err(DoseError::StoreUnavailable(_))));
    }
}

//! VoiceCommandHandler - Answers a spoken utterance about due doses.

use std::sync::Arc;

use crate::application::handlers::dose::{
    GetTodayDosesHandler, GetTodayDosesQuery, SnoozeDoseCommand, SnoozeDoseHandler, TodayDose,
};
use crate::domain::dose::{DoseError, SnoozePolicy};
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::voice::{nearest_to, VoiceIntent, VoiceReply};
use crate::ports::{DoseEventRepository, MedicationRepository};

/// An utterance from an elder user.
#[derive(Debug, Clone)]
pub struct VoiceCommand {
    pub user_id: UserId,
    pub text: String,
    pub now: Timestamp,
}

/// What was understood and what to say back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceCommandResult {
    pub intent: VoiceIntent,
    pub reply: VoiceReply,
}

/// Handler for voice commands.
///
/// Both intents look at today's due doses (`Pending` or `Snoozed`) and pick
/// the one scheduled closest to `now`, before or after.
pub struct VoiceCommandHandler {
    today: GetTodayDosesHandler,
    snooze: SnoozeDoseHandler,
    policy: SnoozePolicy,
}

impl VoiceCommandHandler {
    pub fn new(
        medications: Arc<dyn MedicationRepository>,
        events: Arc<dyn DoseEventRepository>,
        policy: SnoozePolicy,
    ) -> Self {
        Self {
            today: GetTodayDosesHandler::new(medications, events.clone()),
            snooze: SnoozeDoseHandler::new(events, policy),
            policy,
        }
    }

    pub async fn handle(&self, cmd: VoiceCommand) -> Result<VoiceCommandResult, DoseError> {
        let intent = VoiceIntent::parse(&cmd.text);
        tracing::debug!(user_id = %cmd.user_id, ?intent, "Parsed voice intent");

        let reply = match intent {
            VoiceIntent::Query => match self.nearest_due(&cmd.user_id, cmd.now).await? {
                Some(dose) => VoiceReply::TakeNow {
                    dosage: dose.dosage,
                    name: dose.name,
                },
                None => VoiceReply::NothingDue,
            },
            VoiceIntent::Remind { minutes } => {
                let minutes = self.policy.minutes_for(Some(i64::from(minutes)));
                match self.nearest_due(&cmd.user_id, cmd.now).await? {
                    Some(dose) => {
                        self.snooze
                            .handle(SnoozeDoseCommand {
                                user_id: cmd.user_id,
                                medication_id: dose.medication_id,
                                scheduled_at: dose.scheduled_at,
                                minutes: Some(i64::from(minutes)),
                                now: cmd.now,
                            })
                            .await?;
                        VoiceReply::Reminding { minutes }
                    }
                    None => VoiceReply::RemindingNothingDue { minutes },
                }
            }
            VoiceIntent::Unknown => VoiceReply::NotUnderstood,
        };

        Ok(VoiceCommandResult { intent, reply })
    }

    async fn nearest_due(
        &self,
        user_id: &UserId,
        now: Timestamp,
    ) -> Result<Option<TodayDose>, DoseError> {
        let due: Vec<TodayDose> = self
            .today
            .handle(GetTodayDosesQuery {
                user_id: user_id.clone(),
                now,
            })
            .await?
            .into_iter()
            .filter(|dose| dose.status.is_due())
            .collect();

        Ok(nearest_to(&due, now, |dose| dose.scheduled_at).cloned())
    }
}

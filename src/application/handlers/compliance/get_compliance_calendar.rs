//! GetComplianceCalendarHandler - Query handler for the caregiver calendar.

use std::sync::Arc;

use crate::domain::compliance::{
    ComplianceDay, ComplianceInput, ComplianceStrategy, ComplianceWindow,
};
use crate::domain::dose::DoseError;
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{DoseEventRepository, MedicationRepository};

/// Query for a user's trailing compliance calendar.
#[derive(Debug, Clone)]
pub struct GetComplianceCalendarQuery {
    pub user_id: UserId,
    pub now: Timestamp,
}

/// Handler for the compliance calendar.
pub struct GetComplianceCalendarHandler {
    medications: Arc<dyn MedicationRepository>,
    events: Arc<dyn DoseEventRepository>,
    strategy: Arc<dyn ComplianceStrategy>,
    window_days: u32,
}

impl GetComplianceCalendarHandler {
    pub fn new(
        medications: Arc<dyn MedicationRepository>,
        events: Arc<dyn DoseEventRepository>,
        strategy: Arc<dyn ComplianceStrategy>,
        window_days: u32,
    ) -> Self {
        Self {
            medications,
            events,
            strategy,
            window_days,
        }
    }

    /// `window_days + 1` entries, oldest first, ending at `now`'s UTC date.
    pub async fn handle(
        &self,
        query: GetComplianceCalendarQuery,
    ) -> Result<Vec<ComplianceDay>, DoseError> {
        let events = self.events.find_all_by_user(&query.user_id).await?;
        let medications = if self.strategy.uses_schedules() {
            self.medications.find_by_user(&query.user_id).await?
        } else {
            Vec::new()
        };

        let window = ComplianceWindow::trailing(query.now.date(), self.window_days);
        let input = ComplianceInput {
            events: &events,
            medications: &medications,
            now: query.now,
        };
        let calendar = self.strategy.build(&input, &window);

        tracing::debug!(
            user_id = %query.user_id,
            from = %window.start(),
            to = %window.end(),
            events = events.len(),
            days = calendar.len(),
            "Built compliance calendar"
        );

        Ok(calendar)
    }
}

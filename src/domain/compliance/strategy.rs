//! Compliance strategies: which evidence a compliance day is built from.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::domain::dose::{DoseEvent, DoseResolver};
use crate::domain::foundation::Timestamp;
use crate::domain::medication::Medication;

use super::{ComplianceDay, ComplianceWindow, StatusTally};

/// Everything a strategy may look at.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceInput<'a> {
    pub events: &'a [DoseEvent],
    /// Empty unless the strategy asked for schedules.
    pub medications: &'a [Medication],
    pub now: Timestamp,
}

/// Folds a user's history into one classification per window day.
pub trait ComplianceStrategy: Send + Sync {
    /// Whether the caller must load the user's medications.
    fn uses_schedules(&self) -> bool {
        false
    }

    /// Counts per day inside `window`. Days without evidence may be absent.
    fn tally(&self, input: &ComplianceInput<'_>, window: &ComplianceWindow)
        -> BTreeMap<NaiveDate, StatusTally>;

    /// One entry per window day, oldest first.
    fn build(&self, input: &ComplianceInput<'_>, window: &ComplianceWindow) -> Vec<ComplianceDay> {
        let tallies = self.tally(input, window);
        window
            .dates()
            .map(|date| ComplianceDay {
                date,
                status: tallies.get(&date).copied().unwrap_or_default().classify(),
            })
            .collect()
    }
}

/// Counts only stored dose events.
///
/// Doses that were never interacted with have no event and are invisible,
/// so a day where one of two doses was taken reads as `taken`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventsOnlyStrategy;

impl ComplianceStrategy for EventsOnlyStrategy {
    fn tally(
        &self,
        input: &ComplianceInput<'_>,
        window: &ComplianceWindow,
    ) -> BTreeMap<NaiveDate, StatusTally> {
        let mut tallies: BTreeMap<NaiveDate, StatusTally> = BTreeMap::new();
        for event in input.events {
            let date = event.key().date();
            if window.contains(date) {
                tallies.entry(date).or_default().record(event.status());
            }
        }
        tallies
    }
}

/// Stored events plus every expected dose the schedules imply.
///
/// An expected dose with no event counts as pending, so a day is `taken`
/// only when every scheduled dose was taken. Days before a medication was
/// created expect nothing from it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleAwareStrategy;

impl ComplianceStrategy for ScheduleAwareStrategy {
    fn uses_schedules(&self) -> bool {
        true
    }

    fn tally(
        &self,
        input: &ComplianceInput<'_>,
        window: &ComplianceWindow,
    ) -> BTreeMap<NaiveDate, StatusTally> {
        let mut tallies = EventsOnlyStrategy.tally(input, window);
        let recorded: HashSet<_> = input.events.iter().map(|e| *e.key()).collect();
        let today = input.now.date();

        for date in window.dates().take_while(|d| *d <= today) {
            for medication in input.medications {
                if medication.created_at().date() > date {
                    continue;
                }
                for instance in DoseResolver::resolve_on(medication, date) {
                    if !recorded.contains(&instance.key) {
                        tallies.entry(date).or_default().pending += 1;
                    }
                }
            }
        }
        tallies
    }
}

/// Configurable choice of strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStrategyKind {
    #[default]
    EventsOnly,
    ScheduleAware,
}

impl ComplianceStrategyKind {
    pub fn strategy(&self) -> Arc<dyn ComplianceStrategy> {
        match self {
            ComplianceStrategyKind::EventsOnly => Arc::new(EventsOnlyStrategy),
            ComplianceStrategyKind::ScheduleAware => Arc::new(ScheduleAwareStrategy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compliance::ComplianceStatus;
    use crate::domain::dose::DoseKey;
    use crate::domain::foundation::{MedicationId, UserId};
    use crate::domain::medication::WeeklySchedule;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_rfc3339(s).unwrap()
    }

    fn user() -> UserId {
        UserId::new("elder-1").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn medication_created(created: &str, times: &[&str]) -> Medication {
        Medication::reconstitute(
            MedicationId::new(),
            user(),
            "Aspirin".to_string(),
            "1 pill".to_string(),
            None,
            WeeklySchedule::daily(times.iter().map(|t| t.to_string()).collect()),
            ts(created),
        )
    }

    fn status_on(days: &[ComplianceDay], d: NaiveDate) -> ComplianceStatus {
        days.iter().find(|day| day.date == d).unwrap().status
    }

    #[test]
    fn events_only_builds_thirty_one_days() {
        let now = ts("2024-03-01T12:00:00Z");
        let input = ComplianceInput {
            events: &[],
            medications: &[],
            now,
        };
        let window = ComplianceWindow::trailing(now.date(), 30);
        let days = EventsOnlyStrategy.build(&input, &window);
        assert_eq!(days.len(), 31);
        assert!(days.iter().all(|d| d.status == ComplianceStatus::Pending));
    }

    #[test]
    fn events_only_ignores_unrecorded_doses() {
        let med = medication_created("2024-01-01T00:00:00Z", &["08:00", "20:00"]);
        let now = ts("2024-03-01T22:00:00Z");
        let events = vec![DoseEvent::taken(
            user(),
            DoseKey::from_instant(*med.id(), ts("2024-02-28T08:00:00Z")),
            ts("2024-02-28T08:05:00Z"),
        )];
        let meds = vec![med];
        let input = ComplianceInput {
            events: &events,
            medications: &meds,
            now,
        };
        let window = ComplianceWindow::trailing(now.date(), 30);
        let days = EventsOnlyStrategy.build(&input, &window);
        assert_eq!(status_on(&days, date(2024, 2, 28)), ComplianceStatus::Taken);
    }

    #[test]
    fn events_outside_window_are_dropped() {
        let now = ts("2024-03-01T12:00:00Z");
        let events = vec![DoseEvent::missed(
            user(),
            DoseKey::from_instant(MedicationId::new(), ts("2024-01-01T08:00:00Z")),
            now,
        )];
        let input = ComplianceInput {
            events: &events,
            medications: &[],
            now,
        };
        let window = ComplianceWindow::trailing(now.date(), 30);
        assert!(EventsOnlyStrategy.tally(&input, &window).is_empty());
    }

    #[test]
    fn schedule_aware_counts_unrecorded_doses_as_pending() {
        let med = medication_created("2024-01-01T00:00:00Z", &["08:00", "20:00"]);
        let now = ts("2024-03-01T22:00:00Z");
        let events = vec![DoseEvent::taken(
            user(),
            DoseKey::from_instant(*med.id(), ts("2024-02-28T08:00:00Z")),
            ts("2024-02-28T08:05:00Z"),
        )];
        let meds = vec![med];
        let input = ComplianceInput {
            events: &events,
            medications: &meds,
            now,
        };
        let window = ComplianceWindow::trailing(now.date(), 30);
        let days = ScheduleAwareStrategy.build(&input, &window);
        assert_eq!(status_on(&days, date(2024, 2, 28)), ComplianceStatus::Pending);
    }

    #[test]
    fn schedule_aware_marks_fully_taken_day() {
        let med = medication_created("2024-01-01T00:00:00Z", &["08:00"]);
        let now = ts("2024-03-01T22:00:00Z");
        let events = vec![DoseEvent::taken(
            user(),
            DoseKey::from_instant(*med.id(), ts("2024-02-28T08:00:00Z")),
            ts("2024-02-28T08:05:00Z"),
        )];
        let meds = vec![med];
        let input = ComplianceInput {
            events: &events,
            medications: &meds,
            now,
        };
        let window = ComplianceWindow::trailing(now.date(), 30);
        let days = ScheduleAwareStrategy.build(&input, &window);
        assert_eq!(status_on(&days, date(2024, 2, 28)), ComplianceStatus::Taken);
        assert_eq!(status_on(&days, date(2024, 2, 27)), ComplianceStatus::Pending);
    }

    #[test]
    fn schedule_aware_skips_days_before_creation() {
        let med = medication_created("2024-02-29T12:00:00Z", &["08:00"]);
        let now = ts("2024-03-01T22:00:00Z");
        let meds = vec![med];
        let input = ComplianceInput {
            events: &[],
            medications: &meds,
            now,
        };
        let window = ComplianceWindow::trailing(now.date(), 30);
        let tallies = ScheduleAwareStrategy.tally(&input, &window);
        assert!(!tallies.contains_key(&date(2024, 2, 28)));
        assert_eq!(tallies.get(&date(2024, 2, 29)).map(|t| t.pending), Some(1));
    }

    #[test]
    fn kind_selects_strategy() {
        assert!(!ComplianceStrategyKind::EventsOnly.strategy().uses_schedules());
        assert!(ComplianceStrategyKind::ScheduleAware.strategy().uses_schedules());
    }
}

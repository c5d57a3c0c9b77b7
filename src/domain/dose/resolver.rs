//! Dose Resolver - Expands a weekly schedule into concrete dose instances.

use chrono::NaiveDate;

use crate::domain::foundation::Timestamp;
use crate::domain::medication::Medication;

use super::DoseKey;

/// One expected occurrence of taking a medication. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoseInstance<'a> {
    pub medication: &'a Medication,
    pub key: DoseKey,
}

impl DoseInstance<'_> {
    /// The scheduled instant at `hh:mm:00` UTC.
    pub fn scheduled_at(&self) -> Timestamp {
        self.key.scheduled_at()
    }
}

/// Schedule expansion functions.
pub struct DoseResolver;

impl DoseResolver {
    /// Resolves the doses of `medication` due on `now`'s UTC date.
    pub fn resolve(medication: &Medication, now: Timestamp) -> Vec<DoseInstance<'_>> {
        Self::resolve_on(medication, now.date())
    }

    /// Resolves the doses of `medication` due on `date` (UTC).
    ///
    /// # Algorithm
    /// weekday(date) with Monday=0; not in the schedule's day set → nothing.
    /// Otherwise one instance per parseable time entry, at `date hh:mm:00` UTC.
    ///
    /// # Edge Cases
    /// - Malformed entries ("25:99", "abc") are skipped, never an error
    /// - Output keeps the schedule's entry order, which need not be chronological
    /// - Duplicate time entries produce duplicate instances with equal keys
    pub fn resolve_on(medication: &Medication, date: NaiveDate) -> Vec<DoseInstance<'_>> {
        let schedule = medication.schedule();
        if !schedule.is_scheduled_on(date) {
            return Vec::new();
        }

        let malformed = schedule.malformed_times();
        if !malformed.is_empty() {
            tracing::debug!(
                medication_id = %medication.id(),
                ?malformed,
                "Skipping malformed schedule times"
            );
        }

        schedule
            .valid_times()
            .map(|time| DoseInstance {
                medication,
                key: DoseKey::new(*medication.id(), date, time),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MedicationId, UserId};
    use crate::domain::medication::WeeklySchedule;
    use chrono::{Datelike, Duration};
    use proptest::prelude::*;

    fn medication(days: Vec<i64>, times: &[&str]) -> Medication {
        Medication::new(
            MedicationId::new(),
            UserId::new("elder-1").unwrap(),
            "Metformin".to_string(),
            "500mg".to_string(),
            None,
            WeeklySchedule::new(days, times.iter().map(|t| t.to_string()).collect()).unwrap(),
        )
        .unwrap()
    }

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_rfc3339(s).unwrap()
    }

    #[test]
    fn mon_wed_fri_schedule_is_empty_on_tuesday() {
        let med = medication(vec![0, 2, 4], &["08:00", "20:00"]);
        // 2024-01-16 is a Tuesday.
        let doses = DoseResolver::resolve(&med, ts("2024-01-16T10:00:00Z"));
        assert!(doses.is_empty());
    }

    #[test]
    fn mon_wed_fri_schedule_resolves_both_times_on_wednesday() {
        let med = medication(vec![0, 2, 4], &["08:00", "20:00"]);
        let doses = DoseResolver::resolve(&med, ts("2024-01-17T10:00:00Z"));
        let instants: Vec<String> = doses.iter().map(|d| d.scheduled_at().to_rfc3339()).collect();
        assert_eq!(
            instants,
            vec!["2024-01-17T08:00:00+00:00", "2024-01-17T20:00:00+00:00"]
        );
    }

    #[test]
    fn skips_malformed_entries() {
        let med = medication(vec![0, 1, 2, 3, 4, 5, 6], &["25:99", "abc", "09:00"]);
        let doses = DoseResolver::resolve(&med, ts("2024-01-16T10:00:00Z"));
        assert_eq!(doses.len(), 1);
        assert_eq!(doses[0].key.hour(), 9);
    }

    #[test]
    fn all_entries_malformed_yields_nothing() {
        let med = medication(vec![0, 1, 2, 3, 4, 5, 6], &["25:99", "abc"]);
        assert!(DoseResolver::resolve(&med, ts("2024-01-16T10:00:00Z")).is_empty());
    }

    #[test]
    fn keeps_input_order() {
        let med = medication(vec![0, 1, 2, 3, 4, 5, 6], &["20:00", "08:00"]);
        let doses = DoseResolver::resolve(&med, ts("2024-01-16T10:00:00Z"));
        assert_eq!(doses[0].key.hour(), 20);
        assert_eq!(doses[1].key.hour(), 8);
    }

    #[test]
    fn weekday_follows_utc_date_of_now() {
        // 23:30 on Monday at -05:00 is already Tuesday in UTC.
        let med = medication(vec![1], &["09:00"]);
        let doses = DoseResolver::resolve(&med, ts("2024-01-15T23:30:00-05:00"));
        assert_eq!(doses.len(), 1);
        assert_eq!(doses[0].key.date(), NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
    }

    #[test]
    fn instance_keys_carry_the_medication() {
        let med = medication(vec![0, 1, 2, 3, 4, 5, 6], &["09:00"]);
        let doses = DoseResolver::resolve(&med, ts("2024-01-16T09:00:00Z"));
        assert_eq!(doses[0].key.medication_id(), med.id());
        assert_eq!(doses[0].medication.name(), "Metformin");
    }

    proptest! {
        #[test]
        fn unscheduled_weekdays_resolve_to_nothing(
            days in proptest::collection::btree_set(0i64..7, 0..7),
            offset in 0i64..28,
        ) {
            let med = medication(days.iter().copied().collect(), &["08:00", "20:00"]);
            let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset);
            let weekday = i64::from(date.weekday().num_days_from_monday());
            let doses = DoseResolver::resolve_on(&med, date);
            if days.contains(&weekday) {
                prop_assert_eq!(doses.len(), 2);
            } else {
                prop_assert!(doses.is_empty());
            }
        }

        #[test]
        fn arbitrary_time_text_never_panics(raw in "\\PC{0,8}") {
            let med = medication(vec![0, 1, 2, 3, 4, 5, 6], &[raw.as_str()]);
            let doses = DoseResolver::resolve_on(&med, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
            prop_assert!(doses.len() <= 1);
            for dose in doses {
                prop_assert!(dose.key.hour() < 24 && dose.key.minute() < 60);
            }
        }
    }
}

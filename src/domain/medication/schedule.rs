//! Weekly recurring schedule for a medication.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::ValidationError;

/// Highest valid weekday index (Sunday).
pub const MAX_WEEKDAY_INDEX: u8 = 6;

/// Weekdays (0=Monday..6=Sunday) and the times of day a medication is due.
///
/// # Invariants
///
/// - every weekday index is in `0..=6`
/// - `times` keeps the caller's order and raw text; entries that do not parse
///   as `HH:MM` are tolerated here and skipped at resolution time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days_of_week: BTreeSet<u8>,
    times: Vec<String>,
}

impl WeeklySchedule {
    /// Builds a schedule, rejecting weekday indices outside `0..=6`.
    pub fn new(
        days_of_week: impl IntoIterator<Item = i64>,
        times: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let mut days = BTreeSet::new();
        for day in days_of_week {
            if !(0..=i64::from(MAX_WEEKDAY_INDEX)).contains(&day) {
                return Err(ValidationError::out_of_range(
                    "days_of_week",
                    0,
                    i64::from(MAX_WEEKDAY_INDEX),
                    day,
                ));
            }
            days.insert(day as u8);
        }
        Ok(Self {
            days_of_week: days,
            times,
        })
    }

    /// Every day of the week at the given times.
    pub fn daily(times: Vec<String>) -> Self {
        Self {
            days_of_week: (0..=MAX_WEEKDAY_INDEX).collect(),
            times,
        }
    }

    pub fn days_of_week(&self) -> &BTreeSet<u8> {
        &self.days_of_week
    }

    pub fn times(&self) -> &[String] {
        &self.times
    }

    /// True when the medication is scheduled on `date`'s weekday.
    pub fn is_scheduled_on(&self, date: NaiveDate) -> bool {
        let index = date.weekday().num_days_from_monday() as u8;
        self.days_of_week.contains(&index)
    }

    /// Times that parse, in input order.
    pub fn valid_times(&self) -> impl Iterator<Item = NaiveTime> + '_ {
        self.times.iter().filter_map(|t| parse_time(t))
    }

    /// Raw entries that will never produce a dose.
    pub fn malformed_times(&self) -> Vec<&str> {
        self.times
            .iter()
            .filter(|t| parse_time(t).is_none())
            .map(String::as_str)
            .collect()
    }
}

/// Parses a 24-hour `HH:MM` entry.
///
/// Exactly two colon-separated integers are required, hour in `0..=23` and
/// minute in `0..=59`. Whitespace around either part is ignored.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let (hour, minute) = raw.split_once(':')?;
    let hour: u32 = hour.trim().parse().ok()?;
    let minute: u32 = minute.trim().parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

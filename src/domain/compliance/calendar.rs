//! Compliance calendar value objects and the day classification rule.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::dose::DoseStatus;

/// Aggregate classification of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Taken,
    Missed,
    Pending,
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComplianceStatus::Taken => "taken",
            ComplianceStatus::Missed => "missed",
            ComplianceStatus::Pending => "pending",
        };
        write!(f, "{}", s)
    }
}

/// One entry of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceDay {
    pub date: NaiveDate,
    pub status: ComplianceStatus,
}

/// Per-status counts for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub pending: u32,
    pub taken: u32,
    pub missed: u32,
    pub snoozed: u32,
}

impl StatusTally {
    pub fn record(&mut self, status: DoseStatus) {
        match status {
            DoseStatus::Pending => self.pending += 1,
            DoseStatus::Taken => self.taken += 1,
            DoseStatus::Missed => self.missed += 1,
            DoseStatus::Snoozed => self.snoozed += 1,
        }
    }

    /// Any missed dose dominates; a day is taken only when something was
    /// taken and nothing is pending. Snoozed counts do not participate.
    pub fn classify(&self) -> ComplianceStatus {
        if self.missed > 0 {
            ComplianceStatus::Missed
        } else if self.taken > 0 && self.pending == 0 {
            ComplianceStatus::Taken
        } else {
            ComplianceStatus::Pending
        }
    }
}

/// Inclusive range of calendar days ending at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl ComplianceWindow {
    /// `days` days back from `end`, both ends included (`days + 1` entries).
    pub fn trailing(end: NaiveDate, days: u32) -> Self {
        Self {
            start: end - Duration::days(i64::from(days)),
            end,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Dates walking forward from `start` to `end`.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

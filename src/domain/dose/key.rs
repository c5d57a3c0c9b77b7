//! Deterministic identity of a dose occurrence.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{MedicationId, Timestamp};

/// Identity of one scheduled dose: medication plus UTC date, hour and minute.
///
/// The resolver and every store client derive this independently, so it
/// never carries seconds or sub-second jitter. Keys built from
/// `09:00:00.000Z` and `09:00:42.7Z` for the same medication are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoseKey {
    medication_id: MedicationId,
    date: NaiveDate,
    /// Always whole minutes.
    time: NaiveTime,
}

impl DoseKey {
    /// Key for a dose at `time` on `date` (UTC).
    pub fn new(medication_id: MedicationId, date: NaiveDate, time: NaiveTime) -> Self {
        let time = time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time);
        Self {
            medication_id,
            date,
            time,
        }
    }

    /// Key for a caller-supplied instant, normalized to UTC minute precision.
    pub fn from_instant(medication_id: MedicationId, scheduled_at: Timestamp) -> Self {
        let dt = scheduled_at.truncate_to_minute();
        Self::new(medication_id, dt.date(), dt.as_datetime().time())
    }

    /// Rebuilds a key from stored columns. Returns `None` for an invalid time.
    pub fn from_parts(
        medication_id: MedicationId,
        date: NaiveDate,
        hour: u32,
        minute: u32,
    ) -> Option<Self> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(Self::new(medication_id, date, time))
    }

    pub fn medication_id(&self) -> &MedicationId {
        &self.medication_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// The scheduled instant at `hh:mm:00.000` UTC.
    pub fn scheduled_at(&self) -> Timestamp {
        Timestamp::from_datetime(self.date.and_time(self.time).and_utc())
    }
}

impl fmt::Display for DoseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}T{:02}:{:02}Z",
            self.medication_id,
            self.date,
            self.hour(),
            self.minute()
        )
    }
}

//! Persisted record of what happened to one dose instance.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

use super::{DoseKey, DoseStatus};

/// One stored deviation from the implicit `Pending` default.
///
/// # Invariants
///
/// - `(user_id, key)` identifies at most one event; an upsert replaces every
///   other field but never the key
/// - `taken_at` is set only when `status == Taken`
/// - `snooze_until` is set only when `status == Snoozed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseEvent {
    user_id: UserId,
    key: DoseKey,
    status: DoseStatus,
    taken_at: Option<Timestamp>,
    snooze_until: Option<Timestamp>,
    updated_at: Timestamp,
}

impl DoseEvent {
    /// The dose was taken at `now`.
    pub fn taken(user_id: UserId, key: DoseKey, now: Timestamp) -> Self {
        Self {
            user_id,
            key,
            status: DoseStatus::Taken,
            taken_at: Some(now),
            snooze_until: None,
            updated_at: now,
        }
    }

    /// The dose is postponed until `until`.
    pub fn snoozed(user_id: UserId, key: DoseKey, now: Timestamp, until: Timestamp) -> Self {
        Self {
            user_id,
            key,
            status: DoseStatus::Snoozed,
            taken_at: None,
            snooze_until: Some(until),
            updated_at: now,
        }
    }

    /// The dose was recorded as missed.
    pub fn missed(user_id: UserId, key: DoseKey, now: Timestamp) -> Self {
        Self {
            user_id,
            key,
            status: DoseStatus::Missed,
            taken_at: None,
            snooze_until: None,
            updated_at: now,
        }
    }

    /// Reconstitute an event from persistence (no validation).
    pub fn reconstitute(
        user_id: UserId,
        key: DoseKey,
        status: DoseStatus,
        taken_at: Option<Timestamp>,
        snooze_until: Option<Timestamp>,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            user_id,
            key,
            status,
            taken_at,
            snooze_until,
            updated_at,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn key(&self) -> &DoseKey {
        &self.key
    }

    pub fn status(&self) -> DoseStatus {
        self.status
    }

    pub fn taken_at(&self) -> Option<&Timestamp> {
        self.taken_at.as_ref()
    }

    pub fn snooze_until(&self) -> Option<&Timestamp> {
        self.snooze_until.as_ref()
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

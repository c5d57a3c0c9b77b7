//! Dose event repository port.
//!
//! Stores one event per `(user, DoseKey)`. A dose with no stored event is
//! `Pending`, so lookups return `Option` and absence is never an error.

use crate::domain::dose::{DoseEvent, DoseKey};
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Repository port for dose events.
///
/// Implementations must ensure:
/// - `upsert` is last-write-wins on `(user_id, key)`
/// - keys compare by minute, never by raw instant
/// - events are never deleted
#[async_trait]
pub trait DoseEventRepository: Send + Sync {
    /// Find the event recorded for one dose occurrence.
    async fn find(&self, user_id: &UserId, key: &DoseKey)
        -> Result<Option<DoseEvent>, DomainError>;

    /// All events a user ever recorded, in no particular order.
    async fn find_all_by_user(&self, user_id: &UserId) -> Result<Vec<DoseEvent>, DomainError>;

    /// Insert or replace the event for `(event.user_id, event.key)`.
    ///
    /// # Errors
    ///
    /// - `StoreUnavailable` when the store is unreachable or unconfigured
    /// - `DatabaseError` on persistence failure
    async fn upsert(&self, event: &DoseEvent) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dose_event_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DoseEventRepository) {}
    }
}

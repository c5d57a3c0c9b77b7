//! In-memory implementation of DoseEventRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dose::{DoseEvent, DoseKey};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::DoseEventRepository;

/// Dose events keyed by `(user, DoseKey)`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDoseEventRepository {
    events: Arc<RwLock<HashMap<(UserId, DoseKey), DoseEvent>>>,
}

impl InMemoryDoseEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events (useful for tests)
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

#[async_trait]
impl DoseEventRepository for InMemoryDoseEventRepository {
    async fn find(
        &self,
        user_id: &UserId,
        key: &DoseKey,
    ) -> Result<Option<DoseEvent>, DomainError> {
        let events = self.events.read().await;
        Ok(events.get(&(user_id.clone(), *key)).cloned())
    }

    async fn find_all_by_user(&self, user_id: &UserId) -> Result<Vec<DoseEvent>, DomainError> {
        let events = self.events.read().await;
        Ok(events
            .values()
            .filter(|e| e.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn upsert(&self, event: &DoseEvent) -> Result<(), DomainError> {
        let mut events = self.events.write().await;
        events.insert((event.user_id().clone(), *event.key()), event.clone());
        Ok(())
    }
}

//! In-memory store adapters.
//!
//! Back the `memory` database backend and the test suites. State lives in
//! `Arc<RwLock<..>>` maps, so clones share one store.

mod dose_event_repository;
mod medication_repository;

pub use dose_event_repository::InMemoryDoseEventRepository;
pub use medication_repository::InMemoryMedicationRepository;

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::ports::StoreHealth;

/// Health probe for the in-memory backend. Always reachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryStoreHealth;

#[async_trait]
impl StoreHealth for InMemoryStoreHealth {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

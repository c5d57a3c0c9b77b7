//! Medication repository port.
//!
//! Defines the contract for persisting and retrieving Medication aggregates.
//!
//! # Design
//!
//! - **Insert-only**: medications are immutable once created
//! - **User-scoped**: the dose views always start from a user's medications

use crate::domain::foundation::{DomainError, MedicationId, UserId};
use crate::domain::medication::Medication;
use async_trait::async_trait;

/// Repository port for Medication persistence.
#[async_trait]
pub trait MedicationRepository: Send + Sync {
    /// Save a new medication.
    ///
    /// # Errors
    ///
    /// - `StoreUnavailable` when the store is unreachable or unconfigured
    /// - `DatabaseError` on persistence failure
    async fn save(&self, medication: &Medication) -> Result<(), DomainError>;

    /// Find all medications owned by a user, oldest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Medication>, DomainError>;

    /// Find a medication by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &MedicationId) -> Result<Option<Medication>, DomainError>;
}

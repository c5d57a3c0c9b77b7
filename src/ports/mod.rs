//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `MedicationRepository` - Medication persistence
//! - `DoseEventRepository` - Dose event upserts and lookups by `DoseKey`
//! - `StoreHealth` - Liveness probe for the configured store

mod dose_event_repository;
mod medication_repository;
mod store_health;

pub use dose_event_repository::DoseEventRepository;
pub use medication_repository::MedicationRepository;
pub use store_health::StoreHealth;

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - sqlx-backed repositories
//! - `memory` - process-local repositories for tests and the `memory` backend
//! - `http` - axum routers and DTOs

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{InMemoryDoseEventRepository, InMemoryMedicationRepository, InMemoryStoreHealth};
pub use postgres::{PostgresDoseEventRepository, PostgresMedicationRepository, PostgresStoreHealth};

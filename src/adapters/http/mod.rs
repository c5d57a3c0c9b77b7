//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter; [`app_router`] merges them and
//! applies the cross-cutting layers.

pub mod caregiver;
pub mod dose;
pub mod error;
pub mod medication;
pub mod router;
pub mod system;
pub mod voice;

// Re-export key types for convenience
pub use error::ErrorResponse;
pub use router::{api_routes, app_router, ApiDependencies};

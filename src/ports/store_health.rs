//! Store health port, backing the `/health` probe.

use crate::domain::foundation::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Short backend name reported by the probe, e.g. `postgres`.
    fn backend(&self) -> &'static str;

    /// Round-trips to the store.
    async fn ping(&self) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_health_is_object_safe() {
        fn _accepts_dyn(_health: &dyn StoreHealth) {}
    }
}

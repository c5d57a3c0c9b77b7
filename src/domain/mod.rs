//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `medication` - Medication aggregate and weekly schedules
//! - `dose` - Dose keys, events, statuses and schedule resolution
//! - `compliance` - Per-day compliance classification and strategies
//! - `voice` - Keyword intents and spoken replies

pub mod compliance;
pub mod dose;
pub mod foundation;
pub mod medication;
pub mod voice;

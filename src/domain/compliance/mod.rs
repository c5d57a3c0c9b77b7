//! Compliance domain module.
//!
//! Classifies each day of a trailing window as taken, missed or pending.
//! The evidence a day is built from is chosen by a [`ComplianceStrategy`],
//! so callers stay unchanged when the strategy does.

mod calendar;
mod strategy;

pub use calendar::{ComplianceDay, ComplianceStatus, ComplianceWindow, StatusTally};
pub use strategy::{
    ComplianceInput, ComplianceStrategy, ComplianceStrategyKind, EventsOnlyStrategy,
    ScheduleAwareStrategy,
};

/// Default trailing window: 30 days back plus today.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

//! SmartPill - Medication dose tracking for elder users
//!
//! Resolves weekly medication schedules into the day's doses, records
//! take/snooze/miss actions against them, answers fixed voice commands, and
//! builds a trailing compliance calendar for caregivers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Medication domain module.
//!
//! Pure schedule model: a medication, its owner, and the weekly schedule
//! dose instances are derived from.

mod aggregate;
mod errors;
mod schedule;

pub use aggregate::Medication;
pub use errors::MedicationError;
pub use schedule::{parse_time, WeeklySchedule, MAX_WEEKDAY_INDEX};

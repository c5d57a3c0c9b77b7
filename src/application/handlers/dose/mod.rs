//! Dose command and query handlers.
//!
//! Reads resolve schedules on demand and overlay stored events. Writes are
//! idempotent upserts keyed by `(user, DoseKey)` with no read-modify-write.

mod get_today_doses;
mod mark_missed;
mod mark_taken;
mod snooze_dose;

pub use get_today_doses::{GetTodayDosesHandler, GetTodayDosesQuery, TodayDose};
pub use mark_missed::{MarkMissedCommand, MarkMissedHandler};
pub use mark_taken::{MarkTakenCommand, MarkTakenHandler};
pub use snooze_dose::{SnoozeDoseCommand, SnoozeDoseHandler, SnoozeDoseResult};

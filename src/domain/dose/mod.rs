//! Dose domain module.
//!
//! Dose instances are derived from a medication's weekly schedule on demand
//! and never stored. Dose events are the stored deviations from the implicit
//! `Pending` state, keyed by user and [`DoseKey`].

mod errors;
mod event;
mod key;
mod resolver;
mod snooze;
mod status;

pub use errors::DoseError;
pub use event::DoseEvent;
pub use key::DoseKey;
pub use resolver::{DoseInstance, DoseResolver};
pub use snooze::{
    SnoozePolicy, DEFAULT_MAX_SNOOZE_MINUTES, DEFAULT_SNOOZE_MINUTES, MIN_SNOOZE_MINUTES,
};
pub use status::DoseStatus;

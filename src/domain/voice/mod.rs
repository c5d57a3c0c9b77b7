//! Voice domain module.
//!
//! Fixed keyword matching only: an utterance maps to a [`VoiceIntent`], and
//! every answer is one of the [`VoiceReply`] phrasings.

mod intent;
mod reply;

pub use intent::{VoiceIntent, DEFAULT_REMINDER_MINUTES, REMINDER_LADDER};
pub use reply::VoiceReply;

use crate::domain::foundation::Timestamp;

/// The item whose instant lies closest to `now`, in either direction.
///
/// Ties resolve to the earliest item in slice order.
pub fn nearest_to<T>(items: &[T], now: Timestamp, at: impl Fn(&T) -> Timestamp) -> Option<&T> {
    items
        .iter()
        .min_by_key(|item| at(item).duration_since(&now).num_seconds().abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_rfc3339(s).unwrap()
    }

    #[test]
    fn nearest_looks_both_ways() {
        let items = vec![
            ts("2024-01-15T08:00:00Z"),
            ts("2024-01-15T12:30:00Z"),
            ts("2024-01-15T20:00:00Z"),
        ];
        let now = ts("2024-01-15T12:00:00Z");
        assert_eq!(nearest_to(&items, now, |t| *t), Some(&items[1]));
    }

    #[test]
    fn tie_goes_to_first() {
        let items = vec![ts("2024-01-15T11:00:00Z"), ts("2024-01-15T13:00:00Z")];
        let now = ts("2024-01-15T12:00:00Z");
        assert_eq!(nearest_to(&items, now, |t| *t), Some(&items[0]));
    }

    #[test]
    fn empty_has_no_nearest() {
        let items: Vec<Timestamp> = Vec::new();
        assert_eq!(nearest_to(&items, Timestamp::now(), |t| *t), None);
    }
}

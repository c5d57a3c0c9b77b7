//! Bounds for reminder delays.

/// Shortest allowed snooze.
pub const MIN_SNOOZE_MINUTES: u32 = 1;

/// Default upper bound: one day.
pub const DEFAULT_MAX_SNOOZE_MINUTES: u32 = 24 * 60;

/// Default delay when the caller does not name one.
pub const DEFAULT_SNOOZE_MINUTES: u32 = 15;

/// Clamps caller-supplied snooze minutes into `[1, max_minutes]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnoozePolicy {
    default_minutes: u32,
    max_minutes: u32,
}

impl SnoozePolicy {
    /// `max_minutes` below the minimum is raised to it, and `default_minutes`
    /// is itself clamped.
    pub fn new(default_minutes: u32, max_minutes: u32) -> Self {
        let max_minutes = max_minutes.max(MIN_SNOOZE_MINUTES);
        Self {
            default_minutes: default_minutes.clamp(MIN_SNOOZE_MINUTES, max_minutes),
            max_minutes,
        }
    }

    pub fn default_minutes(&self) -> u32 {
        self.default_minutes
    }

    pub fn max_minutes(&self) -> u32 {
        self.max_minutes
    }

    /// Effective delay for a request. `None` falls back to the default.
    pub fn minutes_for(&self, requested: Option<i64>) -> u32 {
        match requested {
            None => self.default_minutes,
            Some(minutes) => {
                let clamped = minutes.clamp(i64::from(MIN_SNOOZE_MINUTES), i64::from(self.max_minutes));
                if clamped != minutes {
                    tracing::debug!(requested = minutes, clamped, "Clamped snooze minutes");
                }
                clamped as u32
            }
        }
    }
}

impl Default for SnoozePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SNOOZE_MINUTES, DEFAULT_MAX_SNOOZE_MINUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_request_uses_default() {
        assert_eq!(SnoozePolicy::default().minutes_for(None), 15);
    }

    #[test]
    fn in_range_request_is_kept() {
        assert_eq!(SnoozePolicy::default().minutes_for(Some(30)), 30);
    }

    #[test]
    fn non_positive_request_is_raised_to_one_minute() {
        let policy = SnoozePolicy::default();
        assert_eq!(policy.minutes_for(Some(0)), 1);
        assert_eq!(policy.minutes_for(Some(-20)), 1);
    }

    #[test]
    fn huge_request_is_capped_at_one_day() {
        assert_eq!(SnoozePolicy::default().minutes_for(Some(100_000)), 1440);
        assert_eq!(SnoozePolicy::default().minutes_for(Some(i64::MAX)), 1440);
    }

    #[test]
    fn default_is_clamped_into_bounds() {
        let policy = SnoozePolicy::new(90, 60);
        assert_eq!(policy.default_minutes(), 60);
        assert_eq!(SnoozePolicy::new(15, 0).max_minutes(), 1);
    }
}

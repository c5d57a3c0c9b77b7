//! Dose behaviour configuration

use serde::Deserialize;

use crate::domain::compliance::{ComplianceStrategyKind, DEFAULT_WINDOW_DAYS};
use crate::domain::dose::{
    SnoozePolicy, DEFAULT_MAX_SNOOZE_MINUTES, DEFAULT_SNOOZE_MINUTES, MIN_SNOOZE_MINUTES,
};

use super::error::ValidationError;

/// Longest allowed compliance window, one leap year.
const MAX_COMPLIANCE_WINDOW_DAYS: u32 = 366;

/// Snooze and compliance settings
#[derive(Debug, Clone, Deserialize)]
pub struct DosesConfig {
    /// Snooze delay when a request names none
    #[serde(default = "default_snooze_minutes")]
    pub default_snooze_minutes: u32,

    /// Upper clamp for requested snooze delays
    #[serde(default = "default_max_snooze_minutes")]
    pub max_snooze_minutes: u32,

    /// Days before today covered by the compliance calendar
    #[serde(default = "default_compliance_window_days")]
    pub compliance_window_days: u32,

    /// Evidence the compliance calendar is built from
    #[serde(default)]
    pub compliance_strategy: ComplianceStrategyKind,
}

impl DosesConfig {
    pub fn snooze_policy(&self) -> SnoozePolicy {
        SnoozePolicy::new(self.default_snooze_minutes, self.max_snooze_minutes)
    }

    /// Validate dose configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_snooze_minutes < MIN_SNOOZE_MINUTES
            || self.default_snooze_minutes > self.max_snooze_minutes
        {
            return Err(ValidationError::InvalidSnoozeBounds);
        }
        if self.compliance_window_days == 0
            || self.compliance_window_days > MAX_COMPLIANCE_WINDOW_DAYS
        {
            return Err(ValidationError::InvalidComplianceWindow);
        }
        Ok(())
    }
}

impl Default for DosesConfig {
    fn default() -> Self {
        Self {
            default_snooze_minutes: default_snooze_minutes(),
            max_snooze_minutes: default_max_snooze_minutes(),
            compliance_window_days: default_compliance_window_days(),
            compliance_strategy: ComplianceStrategyKind::default(),
        }
    }
}

fn default_snooze_minutes() -> u32 {
    DEFAULT_SNOOZE_MINUTES
}

fn default_max_snooze_minutes() -> u32 {
    DEFAULT_MAX_SNOOZE_MINUTES
}

fn default_compliance_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doses_config_defaults() {
        let config = DosesConfig::default();
        assert_eq!(config.default_snooze_minutes, 15);
        assert_eq!(config.max_snooze_minutes, 1440);
        assert_eq!(config.compliance_window_days, 30);
        assert_eq!(config.compliance_strategy, ComplianceStrategyKind::EventsOnly);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_above_max_is_invalid() {
        let config = DosesConfig {
            default_snooze_minutes: 90,
            max_snooze_minutes: 60,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSnoozeBounds)
        ));
    }

    #[test]
    fn test_zero_window_is_invalid() {
        let config = DosesConfig {
            compliance_window_days: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_snooze_policy_uses_bounds() {
        let config = DosesConfig {
            default_snooze_minutes: 10,
            max_snooze_minutes: 120,
            ..Default::default()
        };
        let policy = config.snooze_policy();
        assert_eq!(policy.minutes_for(None), 10);
        assert_eq!(policy.minutes_for(Some(500)), 120);
    }
}

//! DoseStatus enum for the lifecycle of a single dose.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// What happened (or is set to happen) to one dose instance.
///
/// A dose with no stored event is `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DoseStatus {
    #[default]
    Pending,
    Taken,
    Missed,
    Snoozed,
}

impl DoseStatus {
    /// Still needs the user's attention today.
    pub fn is_due(&self) -> bool {
        match self {
            DoseStatus::Pending | DoseStatus::Snoozed => true,
            DoseStatus::Taken | DoseStatus::Missed => false,
        }
    }

    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DoseStatus::Pending => "pending",
            DoseStatus::Taken => "taken",
            DoseStatus::Missed => "missed",
            DoseStatus::Snoozed => "snoozed",
        }
    }
}

impl fmt::Display for DoseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DoseStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DoseStatus::Pending),
            "taken" => Ok(DoseStatus::Taken),
            "missed" => Ok(DoseStatus::Missed),
            "snoozed" => Ok(DoseStatus::Snoozed),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown dose status '{}'", other),
            )),
        }
    }
}

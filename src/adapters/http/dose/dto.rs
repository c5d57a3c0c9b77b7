//! HTTP DTOs for dose endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::application::handlers::dose::TodayDose;
use crate::domain::dose::{DoseError, DoseStatus};
use crate::domain::foundation::{MedicationId, Timestamp};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Identifies one dose occurrence: take and miss requests.
#[derive(Debug, Clone, Deserialize)]
pub struct DoseActionRequest {
    pub user_id: String,
    pub medication_id: String,
    /// ISO-8601 instant; an offset-less value is read as UTC
    pub scheduled_at: String,
}

/// Request to snooze one dose occurrence.
#[derive(Debug, Clone, Deserialize)]
pub struct SnoozeRequest {
    pub user_id: String,
    pub medication_id: String,
    pub scheduled_at: String,
    #[serde(default)]
    pub minutes: Option<i64>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct TodayDoseResponse {
    pub medication_id: String,
    pub name: String,
    pub dosage: String,
    pub pill_image_url: Option<String>,
    pub scheduled_at: String,
    pub status: DoseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snooze_until: Option<String>,
}

impl From<TodayDose> for TodayDoseResponse {
    fn from(dose: TodayDose) -> Self {
        Self {
            medication_id: dose.medication_id.to_string(),
            name: dose.name,
            dosage: dose.dosage,
            pill_image_url: dose.pill_image_url,
            scheduled_at: dose.scheduled_at.to_rfc3339(),
            status: dose.status,
            taken_at: dose.taken_at.map(|t| t.to_rfc3339()),
            snooze_until: dose.snooze_until.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TodayResponse {
    pub items: Vec<TodayDoseResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnoozeResponse {
    pub ok: bool,
    pub snooze_until: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Parsing helpers
// ════════════════════════════════════════════════════════════════════════════

pub(super) fn parse_medication_id(raw: &str) -> Result<MedicationId, DoseError> {
    raw.parse()
        .map_err(|_| DoseError::validation("medication_id", format!("not a UUID: {}", raw)))
}

/// RFC 3339 first, then a naive `YYYY-MM-DDTHH:MM:SS[.f]` taken as UTC.
pub(super) fn parse_instant(raw: &str) -> Result<Timestamp, DoseError> {
    if let Ok(ts) = Timestamp::parse_rfc3339(raw) {
        return Ok(ts);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Timestamp::from_datetime(naive.and_utc()))
        .map_err(|_| DoseError::validation("scheduled_at", format!("not an ISO-8601 instant: {}", raw)))
}

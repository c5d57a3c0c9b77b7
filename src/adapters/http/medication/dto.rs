//! HTTP DTOs for medication endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::medication::Medication;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Weekly schedule as sent by clients.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRequest {
    /// 0=Monday..6=Sunday
    #[serde(default)]
    pub days_of_week: Vec<i64>,
    /// `HH:MM` entries, UTC
    #[serde(default)]
    pub times: Vec<String>,
}

/// Request to register a medication.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMedicationRequest {
    pub user_id: String,
    pub name: String,
    pub dosage: String,
    #[serde(default)]
    pub pill_image_url: Option<String>,
    pub schedule: ScheduleRequest,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CreateMedicationResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    pub days_of_week: Vec<u8>,
    pub times: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MedicationResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub dosage: String,
    pub pill_image_url: Option<String>,
    pub schedule: ScheduleResponse,
    pub created_at: String,
}

impl From<Medication> for MedicationResponse {
    fn from(medication: Medication) -> Self {
        Self {
            id: medication.id().to_string(),
            user_id: medication.user_id().to_string(),
            name: medication.name().to_string(),
            dosage: medication.dosage().to_string(),
            pill_image_url: medication.pill_image_url().map(str::to_string),
            schedule: ScheduleResponse {
                days_of_week: medication.schedule().days_of_week().iter().copied().collect(),
                times: medication.schedule().times().to_vec(),
            },
            created_at: medication.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MedicationListResponse {
    pub items: Vec<MedicationResponse>,
}

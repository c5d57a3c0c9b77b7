//! HTTP handlers for medication endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::medication::{
    CreateMedicationCommand, CreateMedicationHandler, GetMedicationHandler, GetMedicationQuery,
    ListMedicationsHandler, ListMedicationsQuery,
};
use crate::domain::foundation::{MedicationId, UserId};
use crate::domain::medication::MedicationError;

use super::dto::{
    CreateMedicationRequest, CreateMedicationResponse, MedicationListResponse, MedicationResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct MedicationHandlers {
    create_handler: Arc<CreateMedicationHandler>,
    list_handler: Arc<ListMedicationsHandler>,
    get_handler: Arc<GetMedicationHandler>,
}

impl MedicationHandlers {
    pub fn new(
        create_handler: Arc<CreateMedicationHandler>,
        list_handler: Arc<ListMedicationsHandler>,
        get_handler: Arc<GetMedicationHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/medications - Register a medication
pub async fn create_medication(
    State(handlers): State<MedicationHandlers>,
    Json(req): Json<CreateMedicationRequest>,
) -> Response {
    let user_id = match UserId::new(req.user_id) {
        Ok(id) => id,
        Err(e) => return handle_medication_error(e.into()),
    };

    let cmd = CreateMedicationCommand {
        user_id,
        name: req.name,
        dosage: req.dosage,
        pill_image_url: req.pill_image_url,
        days_of_week: req.schedule.days_of_week,
        times: req.schedule.times,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => {
            let response = CreateMedicationResponse {
                id: result.medication.id().to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_medication_error(e),
    }
}

/// GET /api/medications/:user_id - List a user's medications
pub async fn list_medications(
    State(handlers): State<MedicationHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_medication_error(e.into()),
    };

    match handlers.list_handler.handle(ListMedicationsQuery { user_id }).await {
        Ok(medications) => {
            let response = MedicationListResponse {
                items: medications.into_iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_medication_error(e),
    }
}

/// GET /api/medications/:user_id/:medication_id - Fetch one medication
pub async fn get_medication(
    State(handlers): State<MedicationHandlers>,
    Path((user_id, medication_id)): Path<(String, String)>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_medication_error(e.into()),
    };
    let medication_id: MedicationId = match medication_id.parse() {
        Ok(id) => id,
        Err(_) => {
            return handle_medication_error(MedicationError::validation(
                "medication_id",
                format!("not a UUID: {}", medication_id),
            ))
        }
    };

    let query = GetMedicationQuery {
        user_id,
        medication_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(medication) => {
            (StatusCode::OK, Json(MedicationResponse::from(medication))).into_response()
        }
        Err(e) => handle_medication_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_medication_error(error: MedicationError) -> Response {
    match error {
        MedicationError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Medication", &id.to_string())),
        )
            .into_response(),
        MedicationError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&field, message)),
        )
            .into_response(),
        MedicationError::StoreUnavailable(msg) => {
            tracing::warn!(error = %msg, "Store unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::store_unavailable(msg)),
            )
                .into_response()
        }
        MedicationError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Medication request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(msg)),
            )
                .into_response()
        }
    }
}

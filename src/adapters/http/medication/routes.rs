//! HTTP routes for medication endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_medication, get_medication, list_medications, MedicationHandlers};

/// Creates the medication router.
///
/// # Routes
/// - `POST /api/medications` - Register a medication
/// - `GET /api/medications/:user_id` - List a user's medications
/// - `GET /api/medications/:user_id/:medication_id` - Fetch one medication
pub fn medication_routes(handlers: MedicationHandlers) -> Router {
    Router::new()
        .route("/api/medications", post(create_medication))
        .route("/api/medications/:user_id", get(list_medications))
        .route(
            "/api/medications/:user_id/:medication_id",
            get(get_medication),
        )
        .with_state(handlers)
}

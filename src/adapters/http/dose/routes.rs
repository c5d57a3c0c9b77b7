//! HTTP routes for dose endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_today, miss_dose, snooze_dose, take_dose, DoseHandlers};

/// Creates the dose router.
///
/// # Routes
/// - `GET /api/today/:user_id` - Today's doses
/// - `POST /api/take` - Mark taken
/// - `POST /api/snooze` - Snooze
/// - `POST /api/miss` - Mark missed
pub fn dose_routes(handlers: DoseHandlers) -> Router {
    Router::new()
        .route("/api/today/:user_id", get(get_today))
        .route("/api/take", post(take_dose))
        .route("/api/snooze", post(snooze_dose))
        .route("/api/miss", post(miss_dose))
        .with_state(handlers)
}

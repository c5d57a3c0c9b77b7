//! HTTP adapter for caregiver views.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::adapters::http::dose::handle_dose_error;
use crate::application::handlers::compliance::{
    GetComplianceCalendarHandler, GetComplianceCalendarQuery,
};
use crate::domain::compliance::{ComplianceDay, ComplianceStatus};
use crate::domain::foundation::{Timestamp, UserId};

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceDayResponse {
    /// `YYYY-MM-DD`
    pub date: String,
    pub status: ComplianceStatus,
}

impl From<ComplianceDay> for ComplianceDayResponse {
    fn from(day: ComplianceDay) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            status: day.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceResponse {
    pub calendar: Vec<ComplianceDayResponse>,
}

/// GET /api/caregiver/compliance/:user_id - Trailing compliance calendar
pub async fn get_compliance(
    State(handler): State<Arc<GetComplianceCalendarHandler>>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_dose_error(e.into()),
    };

    let query = GetComplianceCalendarQuery {
        user_id,
        now: Timestamp::now(),
    };

    match handler.handle(query).await {
        Ok(calendar) => {
            let response = ComplianceResponse {
                calendar: calendar.into_iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_dose_error(e),
    }
}

pub fn caregiver_routes(handler: Arc<GetComplianceCalendarHandler>) -> Router {
    Router::new()
        .route("/api/caregiver/compliance/:user_id", get(get_compliance))
        .with_state(handler)
}

//! HTTP handlers for dose endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::dose::{
    GetTodayDosesHandler, GetTodayDosesQuery, MarkMissedCommand, MarkMissedHandler,
    MarkTakenCommand, MarkTakenHandler, SnoozeDoseCommand, SnoozeDoseHandler,
};
use crate::domain::dose::DoseError;
use crate::domain::foundation::{MedicationId, Timestamp, UserId};

use super::dto::{
    parse_instant, parse_medication_id, DoseActionRequest, OkResponse, SnoozeRequest,
    SnoozeResponse, TodayResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DoseHandlers {
    today_handler: Arc<GetTodayDosesHandler>,
    take_handler: Arc<MarkTakenHandler>,
    snooze_handler: Arc<SnoozeDoseHandler>,
    miss_handler: Arc<MarkMissedHandler>,
}

impl DoseHandlers {
    pub fn new(
        today_handler: Arc<GetTodayDosesHandler>,
        take_handler: Arc<MarkTakenHandler>,
        snooze_handler: Arc<SnoozeDoseHandler>,
        miss_handler: Arc<MarkMissedHandler>,
    ) -> Self {
        Self {
            today_handler,
            take_handler,
            snooze_handler,
            miss_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/today/:user_id - Today's doses with their statuses
pub async fn get_today(
    State(handlers): State<DoseHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_dose_error(e.into()),
    };

    let query = GetTodayDosesQuery {
        user_id,
        now: Timestamp::now(),
    };

    match handlers.today_handler.handle(query).await {
        Ok(doses) => {
            let response = TodayResponse {
                items: doses.into_iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_dose_error(e),
    }
}

/// POST /api/take - Mark a dose taken
pub async fn take_dose(
    State(handlers): State<DoseHandlers>,
    Json(req): Json<DoseActionRequest>,
) -> Response {
    let cmd = match parse_action(req) {
        Ok((user_id, medication_id, scheduled_at)) => MarkTakenCommand {
            user_id,
            medication_id,
            scheduled_at,
            now: Timestamp::now(),
        },
        Err(e) => return handle_dose_error(e),
    };

    match handlers.take_handler.handle(cmd).await {
        Ok(_) => (StatusCode::OK, Json(OkResponse { ok: true })).into_response(),
        Err(e) => handle_dose_error(e),
    }
}

/// POST /api/snooze - Postpone a dose
pub async fn snooze_dose(
    State(handlers): State<DoseHandlers>,
    Json(req): Json<SnoozeRequest>,
) -> Response {
    let minutes = req.minutes;
    let action = DoseActionRequest {
        user_id: req.user_id,
        medication_id: req.medication_id,
        scheduled_at: req.scheduled_at,
    };
    let cmd = match parse_action(action) {
        Ok((user_id, medication_id, scheduled_at)) => SnoozeDoseCommand {
            user_id,
            medication_id,
            scheduled_at,
            minutes,
            now: Timestamp::now(),
        },
        Err(e) => return handle_dose_error(e),
    };

    match handlers.snooze_handler.handle(cmd).await {
        Ok(result) => {
            let response = SnoozeResponse {
                ok: true,
                snooze_until: result.snooze_until.to_rfc3339(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_dose_error(e),
    }
}

/// POST /api/miss - Mark a dose missed
pub async fn miss_dose(
    State(handlers): State<DoseHandlers>,
    Json(req): Json<DoseActionRequest>,
) -> Response {
    let cmd = match parse_action(req) {
        Ok((user_id, medication_id, scheduled_at)) => MarkMissedCommand {
            user_id,
            medication_id,
            scheduled_at,
            now: Timestamp::now(),
        },
        Err(e) => return handle_dose_error(e),
    };

    match handlers.miss_handler.handle(cmd).await {
        Ok(_) => (StatusCode::OK, Json(OkResponse { ok: true })).into_response(),
        Err(e) => handle_dose_error(e),
    }
}

fn parse_action(
    req: DoseActionRequest,
) -> Result<(UserId, MedicationId, Timestamp), DoseError> {
    let user_id = UserId::new(req.user_id)?;
    let medication_id = parse_medication_id(&req.medication_id)?;
    let scheduled_at = parse_instant(&req.scheduled_at)?;
    Ok((user_id, medication_id, scheduled_at))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

pub(crate) fn handle_dose_error(error: DoseError) -> Response {
    match error {
        DoseError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&field, message)),
        )
            .into_response(),
        DoseError::StoreUnavailable(msg) => {
            tracing::warn!(error = %msg, "Store unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::store_unavailable(msg)),
            )
                .into_response()
        }
        DoseError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Dose request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(msg)),
            )
                .into_response()
        }
    }
}

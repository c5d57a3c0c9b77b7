//! HTTP adapter for the voice assistant endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::adapters::http::dose::handle_dose_error;
use crate::application::handlers::voice::{VoiceCommand, VoiceCommandHandler};
use crate::domain::foundation::{Timestamp, UserId};

#[derive(Debug, Clone, Deserialize)]
pub struct VoiceRequest {
    pub user_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VoiceResponse {
    pub response: String,
}

/// POST /api/voice - Answer a spoken utterance
pub async fn handle_voice(
    State(handler): State<Arc<VoiceCommandHandler>>,
    Json(req): Json<VoiceRequest>,
) -> Response {
    let user_id = match UserId::new(req.user_id) {
        Ok(id) => id,
        Err(e) => return handle_dose_error(e.into()),
    };

    let cmd = VoiceCommand {
        user_id,
        text: req.text,
        now: Timestamp::now(),
    };

    match handler.handle(cmd).await {
        Ok(result) => {
            let response = VoiceResponse {
                response: result.reply.to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_dose_error(e),
    }
}

pub fn voice_routes(handler: Arc<VoiceCommandHandler>) -> Router {
    Router::new()
        .route("/api/voice", post(handle_voice))
        .with_state(handler)
}

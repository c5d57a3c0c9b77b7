//! Banner and health endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::ports::StoreHealth;

#[derive(Debug, Clone, Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub backend: &'static str,
    pub store: &'static str,
    pub connection_status: String,
}

/// GET / - Liveness banner
pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "SmartPill Backend Running",
    })
}

/// GET /health - Store connectivity probe
pub async fn health(State(store): State<Arc<dyn StoreHealth>>) -> Response {
    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                backend: "ok",
                store: store.backend(),
                connection_status: "connected".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, store = store.backend(), "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    backend: "ok",
                    store: store.backend(),
                    connection_status: format!("error: {}", e.message),
                }),
            )
                .into_response()
        }
    }
}

pub fn system_routes(store: Arc<dyn StoreHealth>) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .with_state(store)
}

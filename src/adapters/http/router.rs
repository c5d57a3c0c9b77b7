//! Application router: wires handlers to ports and applies HTTP layers.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::compliance::GetComplianceCalendarHandler;
use crate::application::handlers::dose::{
    GetTodayDosesHandler, MarkMissedHandler, MarkTakenHandler, SnoozeDoseHandler,
};
use crate::application::handlers::medication::{
    CreateMedicationHandler, GetMedicationHandler, ListMedicationsHandler,
};
use crate::application::handlers::voice::VoiceCommandHandler;
use crate::config::{DosesConfig, ServerConfig};
use crate::ports::{DoseEventRepository, MedicationRepository, StoreHealth};

use super::caregiver::caregiver_routes;
use super::dose::{dose_routes, DoseHandlers};
use super::medication::{medication_routes, MedicationHandlers};
use super::system::system_routes;
use super::voice::voice_routes;

/// Store capabilities the API runs on.
#[derive(Clone)]
pub struct ApiDependencies {
    pub medications: Arc<dyn MedicationRepository>,
    pub events: Arc<dyn DoseEventRepository>,
    pub health: Arc<dyn StoreHealth>,
}

/// Routes only, no middleware.
pub fn api_routes(deps: ApiDependencies, doses: &DosesConfig) -> Router {
    let policy = doses.snooze_policy();

    let medication_handlers = MedicationHandlers::new(
        Arc::new(CreateMedicationHandler::new(deps.medications.clone())),
        Arc::new(ListMedicationsHandler::new(deps.medications.clone())),
        Arc::new(GetMedicationHandler::new(deps.medications.clone())),
    );

    let dose_handlers = DoseHandlers::new(
        Arc::new(GetTodayDosesHandler::new(
            deps.medications.clone(),
            deps.events.clone(),
        )),
        Arc::new(MarkTakenHandler::new(deps.events.clone())),
        Arc::new(SnoozeDoseHandler::new(deps.events.clone(), policy)),
        Arc::new(MarkMissedHandler::new(deps.events.clone())),
    );

    let voice_handler = Arc::new(VoiceCommandHandler::new(
        deps.medications.clone(),
        deps.events.clone(),
        policy,
    ));

    let compliance_handler = Arc::new(GetComplianceCalendarHandler::new(
        deps.medications,
        deps.events,
        doses.compliance_strategy.strategy(),
        doses.compliance_window_days,
    ));

    Router::new()
        .merge(system_routes(deps.health))
        .merge(medication_routes(medication_handlers))
        .merge(dose_routes(dose_handlers))
        .merge(voice_routes(voice_handler))
        .merge(caregiver_routes(compliance_handler))
}

/// Full application router with CORS, tracing and request timeout.
pub fn app_router(deps: ApiDependencies, server: &ServerConfig, doses: &DosesConfig) -> Router {
    api_routes(deps, doses)
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// Any origin unless `cors_origins` lists some.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

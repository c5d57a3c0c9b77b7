//! HTTP adapter for medication endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateMedicationRequest, CreateMedicationResponse, MedicationListResponse,
    MedicationResponse, ScheduleRequest, ScheduleResponse,
};
pub use handlers::MedicationHandlers;
pub use routes::medication_routes;

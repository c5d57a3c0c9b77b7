//! HTTP adapter for dose endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DoseActionRequest, OkResponse, SnoozeRequest, SnoozeResponse, TodayDoseResponse,
    TodayResponse,
};
pub(crate) use handlers::handle_dose_error;
pub use handlers::DoseHandlers;
pub use routes::dose_routes;

//! Compliance calendar query handler.

mod get_compliance_calendar;

pub use get_compliance_calendar::{GetComplianceCalendarHandler, GetComplianceCalendarQuery};

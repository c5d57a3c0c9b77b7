//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod compliance;
pub mod dose;
pub mod medication;
pub mod voice;

pub use compliance::{GetComplianceCalendarHandler, GetComplianceCalendarQuery};
pub use dose::{
    GetTodayDosesHandler, GetTodayDosesQuery, MarkMissedCommand, MarkMissedHandler,
    MarkTakenCommand, MarkTakenHandler, SnoozeDoseCommand, SnoozeDoseHandler, SnoozeDoseResult,
    TodayDose,
};
pub use medication::{
    CreateMedicationCommand, CreateMedicationHandler, CreateMedicationResult,
    GetMedicationHandler, GetMedicationQuery, ListMedicationsHandler, ListMedicationsQuery,
};
pub use voice::{VoiceCommand, VoiceCommandHandler, VoiceCommandResult};

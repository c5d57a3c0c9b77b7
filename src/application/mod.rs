//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Medication handlers
    CreateMedicationCommand, CreateMedicationHandler, CreateMedicationResult,
    GetMedicationHandler, GetMedicationQuery, ListMedicationsHandler, ListMedicationsQuery,
    // Dose handlers
    GetTodayDosesHandler, GetTodayDosesQuery, TodayDose,
    MarkMissedCommand, MarkMissedHandler,
    MarkTakenCommand, MarkTakenHandler,
    SnoozeDoseCommand, SnoozeDoseHandler, SnoozeDoseResult,
    // Voice and compliance
    VoiceCommand, VoiceCommandHandler, VoiceCommandResult,
    GetComplianceCalendarHandler, GetComplianceCalendarQuery,
};

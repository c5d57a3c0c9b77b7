//! Medication command and query handlers.

mod create_medication;
mod get_medication;
mod list_medications;

pub use create_medication::{CreateMedicationCommand, CreateMedicationHandler, CreateMedicationResult};
pub use get_medication::{GetMedicationHandler, GetMedicationQuery};
pub use list_medications::{ListMedicationsHandler, ListMedicationsQuery};

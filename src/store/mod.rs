pub mod department;
pub mod survey;

pub use department::{DeleteOutcome, DepartmentStore, UNKNOWN_DEPARTMENT};
pub use survey::SurveyStore;

pub mod formula;
pub mod patient;
pub mod plan;

pub use formula::{DEFAULT_FORMULA, FormulaEntry, FormulaProfile, FormulaTable};
pub use patient::{CalculationRequest, DurationMode, PatientInputs, validate_measurements};
pub use plan::{CalculationResult, DosingPlan, ScheduleEntry, WeightBasis};

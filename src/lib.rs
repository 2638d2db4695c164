pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{DosingError, Result};
pub use models::{CalculationRequest, CalculationResult, DosingPlan, FormulaTable, ScheduleEntry};
pub use planner::calculate;

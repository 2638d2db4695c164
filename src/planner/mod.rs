pub mod constants;
pub mod optimizer;
pub mod pipeline;
pub mod resolver;
pub mod schedule;

pub use constants::*;
pub use optimizer::{CandidateTotals, candidate_error, candidate_totals, optimize};
pub use pipeline::{calculate, calculate_inputs, validate_request};
pub use resolver::{TargetRanges, WeightResolution, energy_protein_targets, resolve};
pub use schedule::{format_day_label, project, ramp_rate};

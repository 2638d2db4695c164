use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::patient::DurationMode;

/// Optimal rate and supplement combination for the full target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DosingPlan {
    /// Infusion rate in ml/h.
    pub rate: u32,

    /// Protein supplement packets per day.
    pub supplement_count: u32,

    /// Daily energy, formula plus supplements (kcal).
    pub total_energy_kcal: i64,

    /// Daily protein, formula plus supplements (g).
    pub total_protein_g: i64,
}

/// One day of the ramp-up schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day label, "M/D" without leading zeros.
    pub date: String,
    pub rate: u32,
    pub supplement_count: u32,
    pub total_energy_kcal: i64,
    pub total_protein_g: i64,
}

/// Which weight the dosing targets were computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightBasis {
    Actual,
    Adjusted,
}

impl WeightBasis {
    pub fn label(self) -> &'static str {
        match self {
            WeightBasis::Actual => "actual body weight",
            WeightBasis::Adjusted => "adjusted body weight",
        }
    }
}

impl fmt::Display for WeightBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot produced by one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub start_date: NaiveDate,
    pub duration: DurationMode,
    pub days_to_target: u32,
    pub formula: String,

    pub bmi: i64,
    pub is_obese: bool,
    pub used_body_weight_kg: i64,
    pub weight_basis: WeightBasis,

    pub min_energy_target: i64,
    pub max_energy_target: i64,
    pub min_protein_target: i64,
    pub max_protein_target: i64,

    pub best: DosingPlan,
    pub schedule: Vec<ScheduleEntry>,
}

impl CalculationResult {
    /// Final day of the ramp-up, where the full rate is reached.
    pub fn final_day(&self) -> Option<&ScheduleEntry> {
        self.schedule.last()
    }
}

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DosingError, Result};
use crate::models::formula::{DEFAULT_FORMULA, FormulaProfile};

/// Daily feeding window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DurationMode {
    /// Continuous infusion over 24 hours.
    #[default]
    #[serde(rename = "24h")]
    Continuous24h,

    /// Cyclic infusion over 15 hours.
    #[serde(rename = "15h")]
    Cyclic15h,
}

impl DurationMode {
    pub fn hours_per_day(self) -> u32 {
        match self {
            DurationMode::Continuous24h => 24,
            DurationMode::Cyclic15h => 15,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DurationMode::Continuous24h => "24h",
            DurationMode::Cyclic15h => "15h",
        }
    }
}

impl fmt::Display for DurationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationMode {
    type Err = DosingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "24h" | "24" => Ok(DurationMode::Continuous24h),
            "15h" | "15" => Ok(DurationMode::Cyclic15h),
            other => Err(DosingError::InvalidInput(format!(
                "Duration must be '24h' or '15h', got '{}'",
                other
            ))),
        }
    }
}

/// Raw calculation request, as entered by the user.
///
/// The formula is referenced by name and resolved against a
/// [`FormulaTable`](crate::models::FormulaTable) during calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub start_date: NaiveDate,
    pub duration: DurationMode,
    pub days_to_target: u32,
    pub formula_key: String,
}

/// Height preset on the input form.
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;

/// Weight preset on the input form.
pub const DEFAULT_WEIGHT_KG: f64 = 60.0;

/// Ramp-up length preset on the input form.
pub const DEFAULT_DAYS_TO_TARGET: u32 = 4;

impl CalculationRequest {
    /// Request prefilled with the form defaults, starting on `start_date`.
    pub fn with_defaults(start_date: NaiveDate) -> Self {
        Self {
            height_cm: DEFAULT_HEIGHT_CM,
            weight_kg: DEFAULT_WEIGHT_KG,
            start_date,
            duration: DurationMode::default(),
            days_to_target: DEFAULT_DAYS_TO_TARGET,
            formula_key: DEFAULT_FORMULA.to_string(),
        }
    }
}

/// Check the measurements the arithmetic depends on.
///
/// Height and weight must be finite and positive; the ramp-up needs at least
/// one day.
pub fn validate_measurements(height_cm: f64, weight_kg: f64, days_to_target: u32) -> Result<()> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(DosingError::InvalidInput(format!(
            "Height must be a positive number of cm, got {}",
            height_cm
        )));
    }

    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(DosingError::InvalidInput(format!(
            "Weight must be a positive number of kg, got {}",
            weight_kg
        )));
    }

    if days_to_target == 0 {
        return Err(DosingError::InvalidInput(
            "Days to target must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// Validated inputs with the formula already resolved.
///
/// Only constructed through [`PatientInputs::new`], so every value reaching
/// the planner has passed [`validate_measurements`].
#[derive(Debug, Clone, PartialEq)]
pub struct PatientInputs {
    height_cm: f64,
    weight_kg: f64,
    start_date: NaiveDate,
    duration: DurationMode,
    days_to_target: u32,
    formula: FormulaProfile,
}

impl PatientInputs {
    pub fn new(
        height_cm: f64,
        weight_kg: f64,
        start_date: NaiveDate,
        duration: DurationMode,
        days_to_target: u32,
        formula: FormulaProfile,
    ) -> Result<Self> {
        validate_measurements(height_cm, weight_kg, days_to_target)?;

        if !formula.is_valid() {
            return Err(DosingError::InvalidInput(format!(
                "Formula densities must be finite and non-negative (kcal={}, protein={})",
                formula.kcal_per_ml, formula.protein_g_per_ml
            )));
        }

        Ok(Self {
            height_cm,
            weight_kg,
            start_date,
            duration,
            days_to_target,
            formula,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn duration(&self) -> DurationMode {
        self.duration
    }

    pub fn days_to_target(&self) -> u32 {
        self.days_to_target
    }

    pub fn formula(&self) -> &FormulaProfile {
        &self.formula
    }
}

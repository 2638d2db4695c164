use tracing::info;

use crate::error::Result;
use crate::models::{
    CalculationRequest, CalculationResult, FormulaTable, PatientInputs, validate_measurements,
};
use crate::planner::optimizer::optimize;
use crate::planner::resolver::{energy_protein_targets, resolve};
use crate::planner::schedule::project;

/// Reject inputs the arithmetic cannot handle.
pub fn validate_request(request: &CalculationRequest) -> Result<()> {
    validate_measurements(request.height_cm, request.weight_kg, request.days_to_target)
}

/// Run a full calculation: resolve weight, optimize, project the ramp-up.
///
/// Validation and formula lookup both happen before any arithmetic, so an
/// error never leaves a partial result behind.
pub fn calculate(request: &CalculationRequest, table: &FormulaTable) -> Result<CalculationResult> {
    validate_request(request)?;
    let entry = table.lookup(&request.formula_key)?;

    let inputs = PatientInputs::new(
        request.height_cm,
        request.weight_kg,
        request.start_date,
        request.duration,
        request.days_to_target,
        entry.profile,
    )?;

    calculate_inputs(&inputs, &entry.name)
}

/// Calculation over validated inputs with a resolved formula.
pub fn calculate_inputs(inputs: &PatientInputs, formula_name: &str) -> Result<CalculationResult> {
    let hours_per_day = inputs.duration().hours_per_day();
    let weight = resolve(inputs.height_cm(), inputs.weight_kg());
    let targets = energy_protein_targets(weight.used_body_weight_kg);
    let best = optimize(weight.used_body_weight_kg, inputs.formula(), hours_per_day);
    let schedule = project(
        &best,
        inputs.days_to_target(),
        hours_per_day,
        inputs.formula(),
        inputs.start_date(),
    )?;

    info!(
        formula = formula_name,
        rate = best.rate,
        supplements = best.supplement_count,
        days = inputs.days_to_target(),
        "calculated dosing plan"
    );

    Ok(CalculationResult {
        height_cm: inputs.height_cm(),
        weight_kg: inputs.weight_kg(),
        start_date: inputs.start_date(),
        duration: inputs.duration(),
        days_to_target: inputs.days_to_target(),
        formula: formula_name.to_string(),
        bmi: weight.bmi,
        is_obese: weight.is_obese,
        used_body_weight_kg: weight.used_body_weight_rounded(),
        weight_basis: weight.weight_basis,
        min_energy_target: targets.min_energy,
        max_energy_target: targets.max_energy,
        min_protein_target: targets.min_protein,
        max_protein_target: targets.max_protein,
        best,
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DosingError;
    use crate::models::{DurationMode, FormulaProfile, WeightBasis};
    use chrono::NaiveDate;

    fn request() -> CalculationRequest {
        CalculationRequest::with_defaults(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())
    }

    #[test]
    fn test_default_request() {
        let result = calculate(&request(), &FormulaTable::builtin()).unwrap();
        assert_eq!(result.bmi, 21);
        assert_eq!(result.used_body_weight_kg, 60);
        assert_eq!(result.weight_basis, WeightBasis::Actual);
        assert_eq!(result.best.rate, 32);
        assert_eq!(result.best.supplement_count, 2);
        assert_eq!(result.schedule.len(), 4);
        assert_eq!(result.duration, DurationMode::Continuous24h);
    }

    #[test]
    fn test_rejects_non_positive_height() {
        let mut req = request();
        req.height_cm = 0.0;
        assert!(matches!(
            calculate(&req, &FormulaTable::builtin()),
            Err(DosingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_nan_weight() {
        let mut req = request();
        req.weight_kg = f64::NAN;
        assert!(validate_request(&req).is_err());
    }

    #[test]
    fn test_rejects_zero_days() {
        let mut req = request();
        req.days_to_target = 0;
        assert!(matches!(
            validate_request(&req),
            Err(DosingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validation_runs_before_lookup() {
        let mut req = request();
        req.height_cm = -1.0;
        req.formula_key = "unknown".to_string();
        assert!(matches!(
            calculate(&req, &FormulaTable::builtin()),
            Err(DosingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_cyclic_duration_is_echoed() {
        let mut req = request();
        req.duration = DurationMode::Cyclic15h;
        let result = calculate(&req, &FormulaTable::builtin()).unwrap();
        assert_eq!(result.duration, DurationMode::Cyclic15h);
    }

    #[test]
    fn test_calculate_inputs_keeps_duration() {
        let inputs = PatientInputs::new(
            170.0,
            60.0,
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            DurationMode::Cyclic15h,
            4,
            FormulaProfile::new(2.0, 0.072),
        )
        .unwrap();

        let result = calculate_inputs(&inputs, "custom").unwrap();
        assert_eq!(result.duration, DurationMode::Cyclic15h);
        assert_eq!(result.formula, "custom");
        assert_eq!(result.bmi, 21);
        assert_eq!(result.schedule.len(), 4);
    }

    #[test]
    fn test_zero_height_never_reaches_calculate_inputs() {
        let inputs = PatientInputs::new(
            0.0,
            60.0,
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            DurationMode::Continuous24h,
            4,
            FormulaProfile::new(2.0, 0.072),
        );
        assert!(matches!(inputs, Err(DosingError::InvalidInput(_))));
    }
}

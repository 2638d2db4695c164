use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};

use crate::error::{DosingError, Result};
use crate::models::{CalculationRequest, DEFAULT_FORMULA, DurationMode, FormulaTable};

/// Ramp-up lengths offered on the form.
pub const DAY_OPTIONS: [u32; 2] = [4, 7];

/// Parse a positive number, naming the field on failure.
pub fn parse_positive(input: &str, field: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| DosingError::InvalidInput(format!("Invalid number for {}", field)))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(DosingError::InvalidInput(format!(
            "{} must be greater than 0",
            field
        )));
    }

    Ok(value)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| DosingError::InvalidDate(format!("'{}': {}", input.trim(), e)))
}

/// Prompt for height in cm.
pub fn prompt_height(default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Height (cm)")
        .default(default.to_string())
        .interact_text()?;

    parse_positive(&input, "height")
}

/// Prompt for weight in kg.
pub fn prompt_weight(default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Weight (kg)")
        .default(default.to_string())
        .interact_text()?;

    parse_positive(&input, "weight")
}

/// Prompt for the first day of feeding.
pub fn prompt_start_date(default: NaiveDate) -> Result<NaiveDate> {
    let input: String = Input::new()
        .with_prompt("Start date (YYYY-MM-DD)")
        .default(default.format("%Y-%m-%d").to_string())
        .interact_text()?;

    parse_date(&input)
}

/// Prompt for the daily feeding window.
pub fn prompt_duration() -> Result<DurationMode> {
    let options = vec!["24 hours", "15 hours"];

    let selection = Select::new()
        .with_prompt("Feeding duration")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        1 => DurationMode::Cyclic15h,
        _ => DurationMode::Continuous24h,
    })
}

/// Prompt for the number of days to reach the target rate.
pub fn prompt_days_to_target() -> Result<u32> {
    let options: Vec<String> = DAY_OPTIONS.iter().map(|d| format!("{} days", d)).collect();

    let selection = Select::new()
        .with_prompt("Days to reach target")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(DAY_OPTIONS.get(selection).copied().unwrap_or(DAY_OPTIONS[0]))
}

/// Prompt for the enteral formula.
pub fn prompt_formula(table: &FormulaTable) -> Result<String> {
    let names = table.names();
    let default = names.iter().position(|n| *n == DEFAULT_FORMULA).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Enteral formula")
        .items(&names)
        .default(default)
        .interact()?;

    names
        .get(selection)
        .map(|n| n.to_string())
        .ok_or_else(|| DosingError::InvalidInput("No formula selected".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for an output file path.
pub fn prompt_path(prompt: &str, default: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?)
}

/// Collect a full calculation request, starting from the form defaults.
pub fn collect_request(table: &FormulaTable, today: NaiveDate) -> Result<CalculationRequest> {
    let defaults = CalculationRequest::with_defaults(today);

    let height_cm = prompt_height(defaults.height_cm)?;
    let weight_kg = prompt_weight(defaults.weight_kg)?;
    let start_date = prompt_start_date(defaults.start_date)?;
    let duration = prompt_duration()?;
    let days_to_target = prompt_days_to_target()?;
    let formula_key = prompt_formula(table)?;

    Ok(CalculationRequest {
        height_cm,
        weight_kg,
        start_date,
        duration,
        days_to_target,
        formula_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive(" 172.5 ", "height").unwrap(), 172.5);
        assert!(parse_positive("0", "height").is_err());
        assert!(parse_positive("-3", "weight").is_err());
        assert!(parse_positive("abc", "weight").is_err());
        assert!(parse_positive("inf", "weight").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-04-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
        );
        assert!(matches!(
            parse_date("04/01/2025"),
            Err(DosingError::InvalidDate(_))
        ));
    }
}

use crate::models::{CalculationResult, DurationMode, FormulaTable};
use crate::planner::constants::{
    ENERGY_PER_KG_MAX, ENERGY_PER_KG_MIN, PROTEIN_PER_KG_MAX, PROTEIN_PER_KG_MIN,
};

fn duration_label(duration: DurationMode) -> &'static str {
    match duration {
        DurationMode::Continuous24h => "24 hours",
        DurationMode::Cyclic15h => "15 hours",
    }
}

fn packets(count: u32) -> &'static str {
    if count == 1 { "packet" } else { "packets" }
}

/// Render the result as the lines shown to the user.
pub fn format_result(result: &CalculationResult) -> Vec<String> {
    let mut lines = vec![
        "Inputs:".to_string(),
        format!("  Height: {} cm", result.height_cm),
        format!("  Weight: {} kg", result.weight_kg),
        format!("  Start date: {}", result.start_date.format("%Y-%m-%d")),
        format!("  Feeding duration: {}", duration_label(result.duration)),
        format!("  Days to target: {} days", result.days_to_target),
        format!("  Formula: {}", result.formula),
        String::new(),
        format!("BMI: {}", result.bmi),
        format!(
            "Dosing weight: {} kg ({})",
            result.used_body_weight_kg, result.weight_basis
        ),
        format!(
            "Energy target: {}-{} kcal/kg/day -> {}-{} kcal/day",
            ENERGY_PER_KG_MIN,
            ENERGY_PER_KG_MAX,
            result.min_energy_target,
            result.max_energy_target
        ),
        format!(
            "Protein target: {}-{} g/kg/day -> {}-{} g/day",
            PROTEIN_PER_KG_MIN,
            PROTEIN_PER_KG_MAX,
            result.min_protein_target,
            result.max_protein_target
        ),
        String::new(),
    ];

    for entry in &result.schedule {
        lines.push(format!(
            "{} {} {}ml/h x {}, protein supplement {} {} (E:{}kcal, P:{}g)",
            entry.date,
            result.formula,
            entry.rate,
            result.duration,
            entry.supplement_count,
            packets(entry.supplement_count),
            entry.total_energy_kcal,
            entry.total_protein_g
        ));
    }

    lines
}

/// Print a calculation result.
pub fn display_result(result: &CalculationResult) {
    println!();
    println!("=== Enteral Nutrition Plan ===");
    println!();
    for line in format_result(result) {
        println!("{}", line);
    }
    println!();
}

/// Print the available formulas with their densities.
pub fn display_formula_table(table: &FormulaTable) {
    println!();
    println!("=== Formulas ({} items) ===", table.len());
    println!();

    for entry in table.entries() {
        println!(
            "  {} - {} kcal/ml, {} g protein/ml",
            entry.name, entry.profile.kcal_per_ml, entry.profile.protein_g_per_ml
        );
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalculationRequest, FormulaTable};
    use crate::planner::calculate;
    use chrono::NaiveDate;

    #[test]
    fn test_format_result_lines() {
        let request =
            CalculationRequest::with_defaults(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        let result = calculate(&request, &FormulaTable::builtin()).unwrap();
        let lines = format_result(&result);

        assert!(lines.contains(&"BMI: 21".to_string()));
        assert!(lines.contains(&"Dosing weight: 60 kg (actual body weight)".to_string()));
        assert!(lines.contains(&"Energy target: 25-30 kcal/kg/day -> 1500-1800 kcal/day".to_string()));
        assert!(lines.contains(&"Protein target: 1.2-1.5 g/kg/day -> 72-90 g/day".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "4/4 ﾃﾙﾐｰﾙ2.0α 32ml/h x 24h, protein supplement 2 packets (E:1636kcal, P:75g)"
        );
    }
}

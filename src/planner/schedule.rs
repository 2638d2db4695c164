use chrono::{Datelike, Days, NaiveDate};

use crate::error::{DosingError, Result};
use crate::models::{DosingPlan, FormulaProfile, ScheduleEntry};
use crate::planner::constants::{SUPPLEMENT_KCAL, SUPPLEMENT_PROTEIN_G};

/// Format a date as "M/D" with no leading zeros and no year.
pub fn format_day_label(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

/// Rate for a given day of the ramp-up (0-based).
///
/// Rises linearly so the last day reaches the optimum rate.
pub fn ramp_rate(best_rate: u32, days_to_target: u32, day: u32) -> u32 {
    (f64::from(best_rate) / f64::from(days_to_target) * f64::from(day + 1)).round() as u32
}

/// Expand the optimum into a day-by-day ramp-up schedule.
///
/// The supplement count stays fixed at the optimizer's value while the rate
/// ramps. Formula energy and protein are rounded per day before the
/// supplement contribution is added.
pub fn project(
    best: &DosingPlan,
    days_to_target: u32,
    hours_per_day: u32,
    formula: &FormulaProfile,
    start_date: NaiveDate,
) -> Result<Vec<ScheduleEntry>> {
    let supplement_kcal = (f64::from(best.supplement_count) * SUPPLEMENT_KCAL) as i64;
    let supplement_protein = (f64::from(best.supplement_count) * SUPPLEMENT_PROTEIN_G) as i64;

    (0..days_to_target)
        .map(|day| -> Result<ScheduleEntry> {
            let date = start_date
                .checked_add_days(Days::new(u64::from(day)))
                .ok_or_else(|| {
                    DosingError::InvalidDate(format!(
                        "{} + {} days is out of range",
                        start_date, day
                    ))
                })?;

            let rate = ramp_rate(best.rate, days_to_target, day);
            let volume = f64::from(rate) * f64::from(hours_per_day);
            let energy_from_formula = (volume * formula.kcal_per_ml).round() as i64;
            let protein_from_formula = (volume * formula.protein_g_per_ml).round() as i64;

            Ok(ScheduleEntry {
                date: format_day_label(date),
                rate,
                supplement_count: best.supplement_count,
                total_energy_kcal: energy_from_formula + supplement_kcal,
                total_protein_g: protein_from_formula + supplement_protein,
            })
        })
        .collect()
}

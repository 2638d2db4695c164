use tracing::debug;

use crate::models::{DosingPlan, FormulaProfile};
use crate::planner::constants::*;

/// Daily totals for one (rate, supplement) candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateTotals {
    pub energy_kcal: f64,
    pub protein_g: f64,
}

/// Unrounded daily energy and protein for a candidate.
pub fn candidate_totals(
    rate: u32,
    supplement_count: u32,
    formula: &FormulaProfile,
    hours_per_day: u32,
) -> CandidateTotals {
    let volume = f64::from(rate) * f64::from(hours_per_day);
    let supplements = f64::from(supplement_count);
    CandidateTotals {
        energy_kcal: volume * formula.kcal_per_ml + supplements * SUPPLEMENT_KCAL,
        protein_g: volume * formula.protein_g_per_ml + supplements * SUPPLEMENT_PROTEIN_G,
    }
}

/// Combined L1 distance from the targets.
///
/// Energy (kcal) and protein (g) errors are summed as-is, without weighting.
pub fn candidate_error(totals: CandidateTotals, target_energy: f64, target_protein: f64) -> f64 {
    (totals.energy_kcal - target_energy).abs() + (totals.protein_g - target_protein).abs()
}

/// Find the rate and supplement count closest to 27 kcal/kg and 1.3 g/kg.
///
/// Scans every rate in [`RATE_MIN`, `RATE_MAX`] and, for each, every supplement
/// count in [`SUPPLEMENT_MIN`, `SUPPLEMENT_MAX`]. Only a strictly smaller error
/// replaces the incumbent, so ties resolve to the smallest rate and then the
/// smallest supplement count.
pub fn optimize(
    used_body_weight_kg: f64,
    formula: &FormulaProfile,
    hours_per_day: u32,
) -> DosingPlan {
    let target_energy = used_body_weight_kg * ENERGY_PER_KG_TARGET;
    let target_protein = used_body_weight_kg * PROTEIN_PER_KG_TARGET;

    let mut best: Option<(u32, u32, CandidateTotals)> = None;
    let mut min_error = f64::INFINITY;

    for rate in RATE_MIN..=RATE_MAX {
        for supplement_count in SUPPLEMENT_MIN..=SUPPLEMENT_MAX {
            let totals = candidate_totals(rate, supplement_count, formula, hours_per_day);
            let error = candidate_error(totals, target_energy, target_protein);

            if error < min_error {
                min_error = error;
                best = Some((rate, supplement_count, totals));
            }
        }
    }

    // NaN errors never compare below the incumbent; fall back to the grid origin.
    let (rate, supplement_count, totals) = best.unwrap_or_else(|| {
        (
            RATE_MIN,
            SUPPLEMENT_MIN,
            candidate_totals(RATE_MIN, SUPPLEMENT_MIN, formula, hours_per_day),
        )
    });

    debug!(
        rate,
        supplement_count,
        error = min_error,
        target_energy,
        target_protein,
        candidates = GRID_SIZE,
        "optimizer picked candidate"
    );

    DosingPlan {
        rate,
        supplement_count,
        total_energy_kcal: totals.energy_kcal.round() as i64,
        total_protein_g: totals.protein_g.round() as i64,
    }
}

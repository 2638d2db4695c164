use tracing::debug;

use crate::models::WeightBasis;
use crate::planner::constants::*;

/// Outcome of resolving the body weight used for dosing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightResolution {
    pub bmi: i64,
    pub is_obese: bool,

    /// Unrounded weight fed to the optimizer and the target ranges.
    pub used_body_weight_kg: f64,

    pub ideal_body_weight_kg: f64,
    pub weight_basis: WeightBasis,
}

impl WeightResolution {
    /// Used body weight rounded for display.
    pub fn used_body_weight_rounded(&self) -> i64 {
        self.used_body_weight_kg.round() as i64
    }
}

/// Daily energy (kcal) and protein (g) ranges for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRanges {
    pub min_energy: i64,
    pub max_energy: i64,
    pub min_protein: i64,
    pub max_protein: i64,
}

/// Compute BMI, obesity status, and the used body weight.
///
/// Obesity is judged on the rounded BMI. Callers validate that height is
/// positive; this function does not guard against division by zero.
pub fn resolve(height_cm: f64, weight_kg: f64) -> WeightResolution {
    let height_m = height_cm / 100.0;
    let height_sq = height_m * height_m;

    let bmi = (weight_kg / height_sq).round() as i64;
    let ideal_body_weight_kg = IDEAL_BMI * height_sq;
    let is_obese = bmi >= OBESITY_BMI_THRESHOLD;
    let adjusted = ideal_body_weight_kg + (weight_kg - ideal_body_weight_kg) * ADJUSTED_WEIGHT_FACTOR;

    let (used_body_weight_kg, weight_basis) = if is_obese {
        (adjusted, WeightBasis::Adjusted)
    } else {
        (weight_kg, WeightBasis::Actual)
    };

    debug!(
        bmi,
        is_obese,
        ibw = ideal_body_weight_kg,
        used = used_body_weight_kg,
        "resolved body weight"
    );

    WeightResolution {
        bmi,
        is_obese,
        used_body_weight_kg,
        ideal_body_weight_kg,
        weight_basis,
    }
}

/// Target ranges: 25–30 kcal/kg/day and 1.2–1.5 g/kg/day.
pub fn energy_protein_targets(used_body_weight_kg: f64) -> TargetRanges {
    TargetRanges {
        min_energy: (used_body_weight_kg * ENERGY_PER_KG_MIN).round() as i64,
        max_energy: (used_body_weight_kg * ENERGY_PER_KG_MAX).round() as i64,
        min_protein: (used_body_weight_kg * PROTEIN_PER_KG_MIN).round() as i64,
        max_protein: (used_body_weight_kg * PROTEIN_PER_KG_MAX).round() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_weight_uses_actual() {
        let r = resolve(170.0, 60.0);
        assert_eq!(r.bmi, 21);
        assert!(!r.is_obese);
        assert_eq!(r.used_body_weight_rounded(), 60);
        assert_eq!(r.weight_basis, WeightBasis::Actual);
    }

    #[test]
    fn test_obese_uses_adjusted() {
        // 160 cm, 90 kg -> BMI 35.2, IBW 56.32
        let r = resolve(160.0, 90.0);
        assert_eq!(r.bmi, 35);
        assert!(r.is_obese);
        assert_eq!(r.weight_basis, WeightBasis::Adjusted);
        assert!((r.ideal_body_weight_kg - 56.32).abs() < 1e-9);
        assert!((r.used_body_weight_kg - (56.32 + 33.68 * 0.33)).abs() < 1e-9);
        assert_eq!(r.used_body_weight_rounded(), 67);
    }

    #[test]
    fn test_obesity_judged_on_rounded_bmi() {
        // 100 cm makes BMI equal to weight; 29.5 rounds up to 30
        let r = resolve(100.0, 29.5);
        assert_eq!(r.bmi, 30);
        assert!(r.is_obese);

        let r = resolve(100.0, 29.4);
        assert_eq!(r.bmi, 29);
        assert!(!r.is_obese);
    }

    #[test]
    fn test_targets() {
        let t = energy_protein_targets(60.0);
        assert_eq!(t.min_energy, 1500);
        assert_eq!(t.max_energy, 1800);
        assert_eq!(t.min_protein, 72);
        assert_eq!(t.max_protein, 90);
    }

    #[test]
    fn test_targets_round_fractional_weight() {
        // Adjusted weight from the 160 cm / 90 kg case
        let t = energy_protein_targets(67.4344);
        assert_eq!(t.min_energy, 1686);
        assert_eq!(t.max_energy, 2023);
        assert_eq!(t.min_protein, 81);
        assert_eq!(t.max_protein, 101);
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use enteral_dosing_rs::models::{FormulaProfile, FormulaTable};
use enteral_dosing_rs::planner::{
    RATE_MAX, RATE_MIN, SUPPLEMENT_MAX, SUPPLEMENT_MIN, candidate_error, candidate_totals,
    optimize, project, ramp_rate,
};

use chrono::NaiveDate;

#[test]
fn test_fixture_continuous_24h() {
    let plan = optimize(60.0, &FormulaProfile::new(2.0, 0.072), 24);
    assert_eq!(plan.rate, 32);
    assert_eq!(plan.supplement_count, 2);
}

#[test]
fn test_fixture_cyclic_15h() {
    let plan = optimize(50.0, &FormulaProfile::new(1.5, 0.095), 15);
    assert_eq!(plan.rate, 60);
    assert_eq!(plan.supplement_count, 0);
}

#[test]
fn test_small_patient_stays_in_range() {
    let plan = optimize(30.0, &FormulaProfile::new(1.0, 0.045), 24);
    assert!((RATE_MIN..=RATE_MAX).contains(&plan.rate));
    assert!((SUPPLEMENT_MIN..=SUPPLEMENT_MAX).contains(&plan.supplement_count));
}

#[test]
fn test_random_inputs_stay_on_grid() {
    let mut rng = StdRng::seed_from_u64(123);
    let table = FormulaTable::builtin();

    for _ in 0..200 {
        let used_bw: f64 = rng.gen_range(1.0..250.0);
        let entry = &table.entries()[rng.gen_range(0..table.len())];
        let hours = if rng.gen_bool(0.5) { 24 } else { 15 };

        let plan = optimize(used_bw, &entry.profile, hours);
        assert!((RATE_MIN..=RATE_MAX).contains(&plan.rate));
        assert!((SUPPLEMENT_MIN..=SUPPLEMENT_MAX).contains(&plan.supplement_count));
    }
}

#[test]
fn test_optimum_is_grid_minimum() {
    let formula = FormulaProfile::new(1.5, 0.053);
    let used_bw = 72.0;
    let hours = 15;
    let plan = optimize(used_bw, &formula, hours);

    let target_energy = used_bw * 27.0;
    let target_protein = used_bw * 1.3;
    let best_error = candidate_error(
        candidate_totals(plan.rate, plan.supplement_count, &formula, hours),
        target_energy,
        target_protein,
    );

    for rate in RATE_MIN..=RATE_MAX {
        for supp in SUPPLEMENT_MIN..=SUPPLEMENT_MAX {
            let error = candidate_error(
                candidate_totals(rate, supp, &formula, hours),
                target_energy,
                target_protein,
            );
            assert!(error >= best_error, "({}, {}) beats the optimum", rate, supp);
        }
    }
}

#[test]
fn test_deterministic() {
    let formula = FormulaProfile::new(1.5, 0.095);
    let first = optimize(64.3, &formula, 24);
    let second = optimize(64.3, &formula, 24);
    assert_eq!(first, second);
}

#[test]
fn test_equal_error_keeps_smaller_rate() {
    // Target of 13.5 kcal falls exactly between rates 13 and 14.
    let plan = optimize(0.5, &FormulaProfile::new(1.0, 0.0), 1);
    assert_eq!(plan.rate, 13);
}

#[test]
fn test_schedule_ramps_to_optimum() {
    let formula = FormulaProfile::new(1.5, 0.095);
    let best = optimize(50.0, &formula, 15);
    let start = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    let schedule = project(&best, 4, 15, &formula, start).unwrap();

    assert_eq!(schedule.len(), 4);
    assert!(schedule.windows(2).all(|w| w[0].rate <= w[1].rate));
    assert_eq!(schedule[3].rate, best.rate);
    assert_eq!(schedule[0].date, "6/30");
    assert_eq!(schedule[1].date, "7/1");

    for (i, entry) in schedule.iter().enumerate() {
        assert_eq!(entry.rate, ramp_rate(best.rate, 4, i as u32));
        assert_eq!(entry.supplement_count, best.supplement_count);
    }
}

#[test]
fn test_schedule_length_matches_days() {
    let formula = FormulaProfile::new(2.0, 0.072);
    let best = optimize(60.0, &formula, 24);
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for days in [1, 4, 7] {
        let a = project(&best, days, 24, &formula, start).unwrap();
        let b = project(&best, days, 24, &formula, start).unwrap();
        assert_eq!(a.len(), days as usize);
        assert_eq!(a, b);
    }
}

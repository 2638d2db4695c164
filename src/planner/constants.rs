// ─────────────────────────────────────────────────────────────────────────────
// Body weight
// ─────────────────────────────────────────────────────────────────────────────

/// BMI used to derive ideal body weight (IBW = 22 * height_m^2).
pub const IDEAL_BMI: f64 = 22.0;

/// Rounded BMI at or above which the adjusted body weight is used.
pub const OBESITY_BMI_THRESHOLD: i64 = 30;

/// Fraction of excess weight over IBW counted toward the adjusted body weight.
pub const ADJUSTED_WEIGHT_FACTOR: f64 = 0.33;

// ─────────────────────────────────────────────────────────────────────────────
// Daily targets (per kg of used body weight)
// ─────────────────────────────────────────────────────────────────────────────

/// Displayed energy range, kcal/kg/day.
pub const ENERGY_PER_KG_MIN: f64 = 25.0;
pub const ENERGY_PER_KG_MAX: f64 = 30.0;

/// Displayed protein range, g/kg/day.
pub const PROTEIN_PER_KG_MIN: f64 = 1.2;
pub const PROTEIN_PER_KG_MAX: f64 = 1.5;

/// Single-point energy target the optimizer aims for, kcal/kg/day.
pub const ENERGY_PER_KG_TARGET: f64 = 27.0;

/// Single-point protein target the optimizer aims for, g/kg/day.
pub const PROTEIN_PER_KG_TARGET: f64 = 1.3;

// ─────────────────────────────────────────────────────────────────────────────
// Search grid
// ─────────────────────────────────────────────────────────────────────────────

/// Infusion rate bounds in ml/h (inclusive).
pub const RATE_MIN: u32 = 5;
pub const RATE_MAX: u32 = 200;

/// Supplement packets per day (inclusive).
pub const SUPPLEMENT_MIN: u32 = 0;
pub const SUPPLEMENT_MAX: u32 = 6;

/// Energy per protein supplement packet.
pub const SUPPLEMENT_KCAL: f64 = 50.0;

/// Protein per supplement packet.
pub const SUPPLEMENT_PROTEIN_G: f64 = 10.0;

/// Number of candidates evaluated per optimization.
pub const GRID_SIZE: usize =
    ((RATE_MAX - RATE_MIN + 1) * (SUPPLEMENT_MAX - SUPPLEMENT_MIN + 1)) as usize;

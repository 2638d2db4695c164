use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::warn;

use crate::error::{DosingError, Result};

/// Minimum Jaro-Winkler similarity for a formula name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Nutrient density of an enteral formula, per ml.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormulaProfile {
    #[serde(rename = "kcal")]
    pub kcal_per_ml: f64,

    #[serde(rename = "protein")]
    pub protein_g_per_ml: f64,
}

impl FormulaProfile {
    pub const fn new(kcal_per_ml: f64, protein_g_per_ml: f64) -> Self {
        Self {
            kcal_per_ml,
            protein_g_per_ml,
        }
    }

    /// Densities must be finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.kcal_per_ml.is_finite()
            && self.protein_g_per_ml.is_finite()
            && self.kcal_per_ml >= 0.0
            && self.protein_g_per_ml >= 0.0
    }
}

/// A named formula as it appears in the selection list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaEntry {
    pub name: String,

    #[serde(flatten)]
    pub profile: FormulaProfile,
}

impl FormulaEntry {
    pub fn new(name: &str, kcal_per_ml: f64, protein_g_per_ml: f64) -> Self {
        Self {
            name: name.to_string(),
            profile: FormulaProfile::new(kcal_per_ml, protein_g_per_ml),
        }
    }
}

/// Ordered lookup table of formulas keyed by display name.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaTable {
    entries: Vec<FormulaEntry>,
}

/// Formula selected when none is given.
pub const DEFAULT_FORMULA: &str = "ﾃﾙﾐｰﾙ2.0α";

impl FormulaTable {
    /// The five formulas shipped with the calculator.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                FormulaEntry::new("ｱｲｿｶﾙBag2K", 2.0, 0.072),
                FormulaEntry::new("ﾃﾙﾐｰﾙ2.0α", 2.0, 0.072),
                FormulaEntry::new("ﾍﾟﾌﾟﾀﾒﾝｽﾀﾝﾀﾞｰﾄﾞ", 1.5, 0.053),
                FormulaEntry::new("ﾍﾟﾌﾟﾀﾒﾝAF", 1.5, 0.095),
                FormulaEntry::new("ｱｲｿｶﾙｻﾎﾟｰﾄ1.0", 1.0, 0.045),
            ],
        }
    }

    /// Build a table from user-supplied entries.
    ///
    /// Names are stored trimmed. Rejects an empty list, blank or duplicate
    /// names (case-insensitive), and non-finite or negative densities.
    pub fn from_entries(entries: Vec<FormulaEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(DosingError::InvalidInput(
                "Formula table has no entries".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        let mut trimmed = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(DosingError::InvalidInput(
                    "Formula name must not be empty".to_string(),
                ));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(DosingError::InvalidInput(format!(
                    "Duplicate formula name: {}",
                    name
                )));
            }
            if !entry.profile.is_valid() {
                return Err(DosingError::InvalidInput(format!(
                    "Formula '{}' has invalid densities (kcal={}, protein={})",
                    name, entry.profile.kcal_per_ml, entry.profile.protein_g_per_ml
                )));
            }

            trimmed.push(FormulaEntry {
                name: name.to_string(),
                profile: entry.profile,
            });
        }

        Ok(Self { entries: trimmed })
    }

    /// Look up a formula by name.
    ///
    /// Exact match first, then case-insensitive. A miss reports the closest
    /// known name when one is similar enough.
    pub fn lookup(&self, key: &str) -> Result<&FormulaEntry> {
        let key = key.trim();

        if let Some(entry) = self.entries.iter().find(|e| e.name == key) {
            return Ok(entry);
        }

        let lowered = key.to_lowercase();
        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.name.to_lowercase() == lowered)
        {
            return Ok(entry);
        }

        let suggestion = self.closest_name(key);
        if let Some(name) = &suggestion {
            warn!(requested = key, closest = %name, "formula not found");
        }

        Err(DosingError::UnknownFormula {
            key: key.to_string(),
            suggestion,
        })
    }

    /// Closest formula name by Jaro-Winkler similarity, if any clears the threshold.
    pub fn closest_name(&self, key: &str) -> Option<String> {
        let lowered = key.to_lowercase();
        self.entries
            .iter()
            .map(|e| (e, jaro_winkler(&e.name.to_lowercase(), &lowered)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(e, _)| e.name.clone())
    }

    pub fn entries(&self) -> &[FormulaEntry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FormulaTable {
    fn default() -> Self {
        Self::builtin()
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::models::patient::{DEFAULT_DAYS_TO_TARGET, DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_KG};
use crate::models::{DEFAULT_FORMULA, DurationMode, FormulaTable};
use crate::state::load_formula_table;

/// Enteral dosing: computes the feeding rate and protein supplements that best
/// meet a patient's energy and protein targets, plus a ramp-up schedule.
#[derive(Parser, Debug)]
#[command(name = "enteral-dosing")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a formula table JSON file (defaults to the built-in table).
    #[arg(long, global = true, env = "DOSING_FORMULAS")]
    pub formulas: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prompt for patient data and show the plan.
    Interactive,

    /// Calculate a plan from command-line arguments.
    Calculate(CalculateArgs),

    /// List the available formulas.
    Formulas {
        /// Also write the active table to this JSON file, for use with `--formulas`.
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

impl Cli {
    /// The formula table selected by `--formulas` / `DOSING_FORMULAS`, or the built-in one.
    pub fn formula_table(&self) -> Result<FormulaTable> {
        match &self.formulas {
            Some(path) => load_formula_table(path),
            None => Ok(FormulaTable::builtin()),
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

#[derive(clap::Args, Debug)]
pub struct CalculateArgs {
    /// Height in cm.
    #[arg(long, default_value_t = DEFAULT_HEIGHT_CM)]
    pub height: f64,

    /// Weight in kg.
    #[arg(long, default_value_t = DEFAULT_WEIGHT_KG)]
    pub weight: f64,

    /// First day of feeding (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub start: Option<String>,

    /// Daily feeding window.
    #[arg(long, default_value = "24h", value_parser = parse_duration)]
    pub duration: DurationMode,

    /// Days until the full rate is reached.
    #[arg(long, default_value_t = DEFAULT_DAYS_TO_TARGET, value_parser = clap::value_parser!(u32).range(1..=14))]
    pub days: u32,

    /// Formula name as listed by `formulas`.
    #[arg(long, default_value = DEFAULT_FORMULA)]
    pub formula: String,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Write the result JSON to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the schedule CSV to this file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

fn parse_duration(s: &str) -> std::result::Result<DurationMode, String> {
    s.parse::<DurationMode>().map_err(|e| e.to_string())
}

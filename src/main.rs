use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use enteral_dosing_rs::cli::{CalculateArgs, Cli, Command};
use enteral_dosing_rs::error::Result;
use enteral_dosing_rs::interface::{
    collect_request, display_formula_table, display_result, parse_date, prompt_path, prompt_yes_no,
};
use enteral_dosing_rs::models::{CalculationRequest, FormulaTable};
use enteral_dosing_rs::planner::calculate;
use enteral_dosing_rs::state::{save_formula_table, write_result_json, write_schedule_csv};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for `--json`.
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let table = cli.formula_table()?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(&table),
        Command::Calculate(args) => cmd_calculate(&table, args),
        Command::Formulas { export } => cmd_formulas(&table, export.as_deref()),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Prompt for each field, then show the plan.
fn cmd_interactive(table: &FormulaTable) -> Result<()> {
    let request = collect_request(table, today())?;
    let result = calculate(&request, table)?;

    display_result(&result);

    let export = prompt_yes_no("Export schedule to CSV?", false)?;
    if export {
        let path = PathBuf::from(prompt_path("CSV path", "schedule.csv")?);
        write_schedule_csv(&result, &path)?;
        println!("Schedule written to {}", path.display());
    }

    Ok(())
}

/// List formulas, optionally exporting the table as an editable template.
fn cmd_formulas(table: &FormulaTable, export: Option<&Path>) -> Result<()> {
    display_formula_table(table);

    if let Some(path) = export {
        save_formula_table(path, table)?;
        println!("Formula table written to {}", path.display());
    }

    Ok(())
}

/// Calculate from command-line arguments.
fn cmd_calculate(table: &FormulaTable, args: CalculateArgs) -> Result<()> {
    let start_date = match &args.start {
        Some(s) => parse_date(s)?,
        None => today(),
    };

    let request = CalculationRequest {
        height_cm: args.height,
        weight_kg: args.weight,
        start_date,
        duration: args.duration,
        days_to_target: args.days,
        formula_key: args.formula.clone(),
    };

    let result = calculate(&request, table)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_result(&result);
    }

    if let Some(path) = &args.output {
        write_result_json(&result, path)?;
        eprintln!("Result written to {}", path.display());
    }

    if let Some(path) = &args.csv {
        write_schedule_csv(&result, path)?;
        eprintln!("Schedule written to {}", path.display());
    }

    Ok(())
}

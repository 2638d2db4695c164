use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::CalculationResult;

/// Write the full result as pretty-printed JSON.
pub fn write_result_json(result: &CalculationResult, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(result)?.as_bytes())?;
    Ok(())
}

/// Write the ramp-up schedule as CSV, one row per day.
pub fn write_schedule_csv(result: &CalculationResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "day",
        "date",
        "rate_ml_per_h",
        "hours_per_day",
        "supplement_packets",
        "energy_kcal",
        "protein_g",
    ])?;

    let hours = result.duration.hours_per_day().to_string();
    for (i, entry) in result.schedule.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            entry.date.clone(),
            entry.rate.to_string(),
            hours.clone(),
            entry.supplement_count.to_string(),
            entry.total_energy_kcal.to_string(),
            entry.total_protein_g.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

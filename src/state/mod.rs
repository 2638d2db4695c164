mod export;
mod persistence;

pub use export::{write_result_json, write_schedule_csv};
pub use persistence::{load_formula_table, save_formula_table};

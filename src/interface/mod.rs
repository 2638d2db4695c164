pub mod prompts;
pub mod render;

pub use prompts::{collect_request, parse_date, parse_positive, prompt_path, prompt_yes_no};
pub use render::{display_formula_table, display_result, format_result};

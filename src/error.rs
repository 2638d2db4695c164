use thiserror::Error;

#[derive(Debug, Error)]
pub enum DosingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown formula: {key}{}", suggestion_suffix(.suggestion))]
    UnknownFormula {
        key: String,
        suggestion: Option<String>,
    },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{}'?)", name),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, DosingError>;

use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("output directory does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),
    #[error("could not produce a unique {field} after {attempts} attempts")]
    UniqueExhausted { field: &'static str, attempts: u32 },
    #[error("record error: {0}")]
    Record(#[from] filmseed_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

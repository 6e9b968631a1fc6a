use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by the generators and the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("no valid books found in {}", .0.display())]
    NoValidBooks(PathBuf),
    #[error("no stores found in {}", .0.display())]
    NoStores(PathBuf),
    #[error("{} has no '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: String },
    #[error("failed to read {}: {source}", path.display())]
    Reference {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Core(#[from] bronzegen_core::Error),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("Unsupported event_type: {0}")]
    UnsupportedEventType(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OpsError>;

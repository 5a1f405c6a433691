use thiserror::Error;

/// Linje som ikke har forventet form. Driveren tolker dette som slutt på strømmen.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 5 fields, got {0}")]
    TooFewFields(usize),
    #[error("bad timestamp token {0:?}")]
    BadTimestamp(String),
}

#[derive(Debug, Error)]
pub enum CloudError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CloudError>;

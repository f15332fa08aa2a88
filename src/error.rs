use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutlayError {
    #[error("Database error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid expense: {0}")]
    Validation(String),

    #[error("No expense with id {0}")]
    NotFound(i64),

    #[error("Malformed backup document: {0}")]
    RestoreParse(String),

    #[error("Not enough data: {0}")]
    Precondition(&'static str),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, OutlayError>;

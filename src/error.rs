use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Note not found: {0}")]
    NotFound(u64),

    #[error("Invalid note ID: {0}")]
    InvalidId(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing field in note record: {0}")]
    MissingField(&'static str),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Failed to read notes file: {0}")]
    StorageRead(String),

    #[error("Failed to write notes file: {0}")]
    StorageWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, NotebookError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapperError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Schema not found: {0}")]
    SchemaNotFound(String),

    #[error("Schema load error: {0}")]
    SchemaLoadError(String),

    #[error("Pattern error: {0}")]
    PatternError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MapperError {
    /// Errors caused by the caller's request rather than by the mapper's own
    /// resources. These are never worth retrying.
    pub fn is_client_error(&self) -> bool {
        matches!(self, MapperError::InvalidInput(_) | MapperError::SchemaNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, MapperError>;

//! Heimdall error types

/// Heimdall error types
#[derive(Debug, thiserror::Error)]
pub enum HeimdallError {
    // Collaborator errors
    #[error("pose extractor error: {0}")]
    Extractor(String),

    #[error("reference store error: {0}")]
    Store(String),

    #[error("history sink error: {0}")]
    Sink(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown movement: {0}")]
    UnknownMovement(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for Heimdall operations
pub type Result<T> = std::result::Result<T, HeimdallError>;

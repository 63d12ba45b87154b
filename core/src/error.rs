use thiserror::Error;

/// Main error type for the Medium client
#[derive(Debug, Error)]
pub enum MediumError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using MediumError
pub type Result<T> = std::result::Result<T, MediumError>;

use thiserror::Error;

/// Top-level error types for deskmate
#[derive(Debug, Error)]
pub enum DeskmateError {
    #[error("Failed to read config file: {0}")]
    ConfigRead(String),

    #[error("Invalid config file: {0}")]
    ConfigParse(String),

    #[error(
        "Generative service not configured.\n\nAdd an [openai] section with api_key to config."
    )]
    NotConfigured,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

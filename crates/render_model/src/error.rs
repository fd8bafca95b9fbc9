//! Error types for render model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid style configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

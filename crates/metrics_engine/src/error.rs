//! Error types for the metrics engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Invalid font data: {0}")]
    InvalidFontData(String),

    #[error("Font loading failed: {0}")]
    LoadingFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MetricsError>;

//! Error types for layout engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid line height: {0}")]
    InvalidLineHeight(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

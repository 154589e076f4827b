//! Error types for beer color measurement.

use thiserror::Error;

/// Result type alias for beer_color_meter operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The pixel buffer (or its declared dimensions) is malformed.
    #[error("Invalid pixel buffer: {reason}")]
    InvalidInput { reason: String },

    /// The reference tables cannot be used for classification.
    #[error("Invalid reference tables: {reason}")]
    Configuration { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput { reason: reason.into() }
    }

    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration { reason: reason.into() }
    }
}

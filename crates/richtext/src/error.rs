//! Error types for the rich-text model.

use thiserror::Error;

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

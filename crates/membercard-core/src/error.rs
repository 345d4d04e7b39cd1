//! Error types for the member card

use thiserror::Error;

/// Main error type for member card operations
///
/// Only configuration handling can fail. Pointer handling and rendering are
/// total over their inputs.
#[derive(Error, Debug)]
pub enum CardError {
    /// Reading a configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for [`crate::CardConfig`]
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration parsed but holds values the card cannot render
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Color string is not `#rrggbb` or `#rrggbbaa`
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Result type alias for member card operations
pub type Result<T> = std::result::Result<T, CardError>;

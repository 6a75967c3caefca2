//! Error types for halocline.
//!
//! A single error enum covers every failure a coverage query can raise. Lookup
//! failures (time or depth that resolves to no index) are kept apart from
//! malformed input so callers can tell them apart with [`HaloclineError::is_lookup_error`].

use thiserror::Error;

/// The main error type for halocline operations.
#[derive(Error, Debug)]
pub enum HaloclineError {
    /// The requested time does not resolve to a time step
    #[error("Time lookup error: {message}")]
    TimeLookup { message: String },

    /// The requested depth or layer does not resolve to a vertical layer
    #[error("Level lookup error: {message}")]
    LevelLookup { message: String },

    /// A cell's vertical bracket is empty or references unknown layers
    #[error("Invalid bracket at cell (y={y}, x={x}): {message}")]
    InvalidBracket { y: usize, x: usize, message: String },

    /// Unknown or unavailable physical variable
    #[error("Unknown variable: {name}")]
    VariableName { name: String },

    /// Data not found errors
    #[error("Data not found: {message}")]
    DataNotFound { message: String },

    /// Failures raised by a reader implementation
    #[error("Reader error: {message}")]
    Reader { message: String },

    /// Depth table does not fit the grid or the requested lookup
    #[error("Depth table error: {message}")]
    DepthTable { message: String },

    /// Interpolation errors
    #[error("Interpolation error: {message}")]
    Interpolation { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Array shape errors
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl HaloclineError {
    /// True for failures where a time or depth resolved to no valid index.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            HaloclineError::TimeLookup { .. } | HaloclineError::LevelLookup { .. }
        )
    }
}

/// Convenience type alias for Results with HaloclineError
pub type Result<T> = std::result::Result<T, HaloclineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_classification() {
        let err = HaloclineError::TimeLookup {
            message: "index 4 out of range".to_string(),
        };
        assert!(err.is_lookup_error());

        let err = HaloclineError::InvalidBracket {
            y: 1,
            x: 2,
            message: "empty".to_string(),
        };
        assert!(!err.is_lookup_error());
        assert_eq!(err.to_string(), "Invalid bracket at cell (y=1, x=2): empty");
    }
}

//! Error types for wordrank
//!
//! Every fallible operation in the crate returns [`Result`]. Errors are raised
//! before any state is mutated, so a caller never sees a partial distribution.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TextRankError>;

/// Main error type for wordrank
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextRankError {
    /// The graph has no nodes, or carries a weight that is not a
    /// non-negative finite number
    #[error("Invalid graph: {message}")]
    InvalidGraph { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The caller raised the cancellation flag while power iteration was running
    #[error("Cancelled after {iterations} iterations")]
    Cancelled { iterations: usize },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl TextRankError {
    /// Create an invalid graph error
    pub fn invalid_graph(message: impl Into<String>) -> Self {
        Self::InvalidGraph {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a cancellation error
    pub fn cancelled(iterations: usize) -> Self {
        Self::Cancelled { iterations }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the input graph rather than the settings
    pub fn is_invalid_graph(&self) -> bool {
        matches!(self, Self::InvalidGraph { .. })
    }
}

impl From<serde_json::Error> for TextRankError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TextRankError::invalid_graph("no nodes");
        assert!(err.to_string().contains("Invalid graph"));
        assert!(err.to_string().contains("no nodes"));

        let err = TextRankError::cancelled(12);
        assert!(err.to_string().contains("12 iterations"));
    }

    #[test]
    fn test_is_invalid_graph() {
        assert!(TextRankError::invalid_graph("empty").is_invalid_graph());
        assert!(!TextRankError::invalid_config("window_size").is_invalid_graph());
    }

    #[test]
    fn test_from_serde_json() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: TextRankError = parse.unwrap_err().into();
        assert!(matches!(err, TextRankError::Serialization { .. }));
    }
}

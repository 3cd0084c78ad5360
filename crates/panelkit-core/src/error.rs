//! Error types for PanelKit
//!
//! Widget builders and layout strategies are total and never fail. Errors only
//! come from the ambient surface: loading configuration and setting up logging.

use thiserror::Error;

/// Main error type for PanelKit operations
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Initialization error: {message}")]
    Initialization { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PanelError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration {
            message: msg.into(),
        }
    }

    /// Create an initialization error
    pub fn initialization<S: Into<String>>(msg: S) -> Self {
        Self::Initialization {
            message: msg.into(),
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Initialization { .. })
    }
}

/// Result type alias for PanelKit operations
pub type Result<T, E = PanelError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PanelError::configuration("columns must be a number");
        assert_eq!(
            err.to_string(),
            "Configuration error: columns must be a number"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_initialization_is_not_recoverable() {
        let err = PanelError::initialization("subscriber already set");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: PanelError = json_err.into();
        assert!(matches!(err, PanelError::Serialization(_)));
    }
}

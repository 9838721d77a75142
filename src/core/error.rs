//! Permission error types

use thiserror::Error;

/// Errors raised while building templates or materializing permissions
#[derive(Error, Debug)]
pub enum PermissionError {
    /// A required argument was missing (caller bug)
    #[error("Invalid argument: {0} must not be null")]
    InvalidArgument(&'static str),

    /// A template pattern could not be parsed
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// No template exists for the given permission name
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PermissionError {
    /// Create a pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        PermissionError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        PermissionError::InvalidConfig(msg.into())
    }
}

/// Result type alias for permission operations
pub type PermissionResult<T> = Result<T, PermissionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PermissionError::InvalidArgument("template");
        assert_eq!(err.to_string(), "Invalid argument: template must not be null");

        let err = PermissionError::UnknownPermission("ManageSettings".into());
        assert_eq!(err.to_string(), "Unknown permission: ManageSettings");

        let err = PermissionError::invalid_pattern("Edit_{0}_{0}", "more than one placeholder");
        assert_eq!(
            err.to_string(),
            "Invalid pattern 'Edit_{0}_{0}': more than one placeholder"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PermissionError = io_err.into();
        assert!(matches!(err, PermissionError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PermissionError = json_err.into();
        assert!(matches!(err, PermissionError::Serialization(_)));
    }
}

//! Error types for Reel core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Reel operations.
pub type Result<T> = std::result::Result<T, ReelError>;

/// Core error type for Reel operations.
#[derive(Debug, Error)]
pub enum ReelError {
    /// Storage backend error (I/O, bad key)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored movie data could not be loaded
    #[error("Failed to load movies: {0}")]
    Load(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Authentication failed or no session
    #[error("{0}")]
    Auth(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for ReelError {
    fn from(err: std::io::Error) -> Self {
        ReelError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(err: serde_json::Error) -> Self {
        ReelError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_displays_message_verbatim() {
        let err = ReelError::Auth("Invalid email or password".to_string());
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ReelError = io.into();
        assert!(matches!(err, ReelError::Storage(_)));
    }
}

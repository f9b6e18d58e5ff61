//! Error types and error handling for the Courseable service.
//!
//! This module defines the error type used by the server and the
//! shared infrastructure (config, startup). Failures that travel
//! back to API callers inside a result envelope use the separate
//! `client::RequestError` taxonomy.

use thiserror::Error;

/// Result type alias for Courseable operations
pub type Result<T> = std::result::Result<T, CourseableError>;

/// Main error type for the Courseable service
#[derive(Error, Debug)]
pub enum CourseableError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Course data error: {0}")]
    DataError(String),

    #[error("Port {0} is occupied by a foreign process")]
    PortOccupied(u16),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CourseableError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a configuration problem (bad input, not a crash)
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            CourseableError::ConfigError(_) | CourseableError::TomlError(_)
        )
    }

    /// Check if this is the port-identity conflict raised at startup
    pub fn is_port_occupied(&self) -> bool {
        matches!(self, CourseableError::PortOccupied(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_config() {
        let err = CourseableError::ConfigError("bad port".to_string());
        assert!(err.is_config());
        assert!(!err.is_port_occupied());
    }

    #[test]
    fn test_port_occupied_classification() {
        let err = CourseableError::PortOccupied(8023);
        assert!(err.is_port_occupied());
        assert!(!err.is_config());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CourseableError::from(io_err);
        assert!(!err.is_config());
        assert!(err.message().contains("file not found"));
    }

    #[test]
    fn test_error_message() {
        let err = CourseableError::PortOccupied(8023);
        assert!(err.message().contains("8023"));
        assert!(err.message().contains("foreign"));
    }
}

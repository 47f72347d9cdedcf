//! Error types and handling
//!
//! Only systemic failures become errors: unreadable files, invalid
//! configuration, transcript I/O. Domain outcomes such as a denied action
//! or a wrong code are status lines on the simulator, never `Err`.

use crate::types::config::{ConfigError, ConfigValidationError};
use thiserror::Error;

/// Errors that can occur while running a session
#[derive(Debug, Error)]
pub enum AcademyError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Configuration failed validation
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ConfigValidationError),

    /// Command script could not be read
    #[error("Script error: {0}")]
    Script(String),

    /// Transcript could not be written
    #[error("Transcript error: {0}")]
    Transcript(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<anyhow::Error> for AcademyError {
    fn from(error: anyhow::Error) -> Self {
        AcademyError::Script(error.to_string())
    }
}

impl AcademyError {
    /// Create a script error
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    /// Create a transcript error
    pub fn transcript(msg: impl Into<String>) -> Self {
        Self::Transcript(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            AcademyError::Configuration(_) => "Configuration",
            AcademyError::Validation(_) => "Validation",
            AcademyError::Script(_) => "Script",
            AcademyError::Transcript(_) => "Transcript",
            AcademyError::Io(_) => "IO",
            AcademyError::Serialization(_) => "Serialization",
        }
    }
}

/// Result type for session operations
pub type AcademyResult<T> = Result<T, AcademyError>;

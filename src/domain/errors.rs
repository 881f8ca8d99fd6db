//! Domain error types
//!
//! This module defines the error hierarchy for Privlens. Errors are split the
//! same way the pipeline is: input problems that are rejected before analysis
//! runs, collaborator failures that abort a request, and configuration or I/O
//! failures around the edges. Detector-internal anomalies never surface here;
//! they are logged and treated as "no candidates".

use thiserror::Error;

/// Main Privlens error type
#[derive(Debug, Error)]
pub enum PrivlensError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The input file type is not one the loader accepts
    #[error("Unsupported file type: '{extension}'. Allowed: {allowed}")]
    UnsupportedFileType { extension: String, allowed: String },

    /// The submitted text has no characters
    #[error("Input text is empty")]
    EmptyInput,

    /// The submitted text is longer than the configured limit
    #[error("Input text has {chars} characters; the limit is {max}")]
    InputTooLarge { chars: usize, max: usize },

    /// A binary document format was submitted without a text extractor
    #[error("No text extractor available for '{0}' documents")]
    ExtractorUnavailable(String),

    /// The contextual entity recognizer could not be loaded or failed
    #[error("Entity recognizer unavailable: {0}")]
    ModelUnavailable(String),

    /// Audit log errors
    #[error("Audit log error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl PrivlensError {
    /// Whether the submitted input was rejected before analysis
    ///
    /// A missing collaborator (extractor, recognizer) is not an input error.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFileType { .. }
                | Self::EmptyInput
                | Self::InputTooLarge { .. }
                | Self::Io(_)
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for PrivlensError {
    fn from(err: std::io::Error) -> Self {
        PrivlensError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PrivlensError {
    fn from(err: serde_json::Error) -> Self {
        PrivlensError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PrivlensError {
    fn from(err: toml::de::Error) -> Self {
        PrivlensError::Configuration(format!("TOML parse error: {err}"))
    }
}

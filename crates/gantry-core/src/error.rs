//! Error types for Gantry

use thiserror::Error;

/// Result type alias using GantryError
pub type Result<T> = std::result::Result<T, GantryError>;

/// Main error type for Gantry operations
#[derive(Debug, Error)]
pub enum GantryError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Tag-format-related errors
    #[error(transparent)]
    Tag(#[from] TagError),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Version-related errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// A string could not be parsed as a version under the active scheme,
    /// or a tag matched none of the configured formats during extraction.
    #[error("Invalid version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },
}

impl VersionError {
    /// Create an `InvalidVersion` error
    pub fn invalid(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Tag-format-related errors
#[derive(Debug, Error)]
pub enum TagError {
    /// A tag format template compiled into a pattern the regex engine rejects
    #[error("Invalid tag format '{template}': {source}")]
    InvalidTemplate {
        template: String,
        source: regex::Error,
    },
}

impl GantryError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}

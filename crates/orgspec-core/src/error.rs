//! Error types for orgspec-core

use std::path::PathBuf;

/// Result type for orgspec-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or loading specifications
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A deferred factory failed while the resolution pass invoked it
    #[error("Failed to resolve {field} for {target}: {source}")]
    Factory {
        field: &'static str,
        target: String,
        #[source]
        source: Box<Error>,
    },

    /// Raised by factories to report their own failure
    #[error("Factory failed: {message}")]
    FactoryFailed { message: String },

    /// Unknown environment type name
    #[error("Invalid environment type: {value}")]
    InvalidEnvironmentType { value: String },

    /// Unknown component type name
    #[error("Invalid component type: {value}")]
    InvalidComponentType { value: String },

    /// Unknown output format name
    #[error("Invalid output format: {value}")]
    InvalidOutputFormat { value: String },

    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// No organisation registered under the short name
    #[error("Organisation not found: {short_name}")]
    OrganisationNotFound { short_name: String },

    /// No environment with the given name in the organisation
    #[error("Environment not found: {organisation}/{name}")]
    EnvironmentNotFound { organisation: String, name: String },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Create a factory failure with the given message.
    pub fn factory_failed(message: impl Into<String>) -> Self {
        Self::FactoryFailed {
            message: message.into(),
        }
    }

    pub(crate) fn factory(field: &'static str, target: impl Into<String>, source: Error) -> Self {
        Self::Factory {
            field,
            target: target.into(),
            source: Box::new(source),
        }
    }
}

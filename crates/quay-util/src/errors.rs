use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all Quay operations.
#[derive(Debug, Error, Diagnostic)]
pub enum QuayError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed workspace manifest (e.g. Quay.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Quay.toml for syntax errors"))]
    Manifest { message: String },

    /// The build definition is inconsistent (bad repository, unknown module, cycle).
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Fix the repository or module definitions in Quay.toml"))]
    Configuration { message: String },

    /// A credential environment variable is absent or empty.
    #[error("Missing {slot} environment variable")]
    #[diagnostic(help("Export {slot} or add it to .quay.env"))]
    MissingCredential { slot: String },

    /// Transfer of an artifact to a specific publish target failed.
    #[error("Upload to {target} failed: {message}")]
    Upload { target: String, message: String },

    /// Network client setup failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl QuayError {
    /// Shorthand for a [`QuayError::Configuration`] with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

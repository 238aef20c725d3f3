// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum StarTemplateError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<StarTemplateError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} input: {details}")]
    Serialization { format: String, details: String },
}

pub type Result<T> = std::result::Result<T, StarTemplateError>;

impl StarTemplateError {
    /// Returns the innermost registry error, looking through context layers.
    #[must_use]
    pub fn registry_error(&self) -> Option<&RegistryError> {
        match self {
            Self::Context { source, .. } => source.registry_error(),
            Self::Registry(err) => Some(err),
            _ => None,
        }
    }
}

/// Value-object validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Version string must not be empty")]
    EmptyVersion,

    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Errors raised by a package-metadata registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The named package is not registered. This is the only signal callers
    /// recover from by falling back to a sentinel version.
    #[error("Package not found: {name}")]
    PackageNotFound { name: String },

    #[error("Failed to read registry '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed registry '{origin}': {details}")]
    Malformed { origin: String, details: String },
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

impl RegistryError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::PackageNotFound { name: name.into() }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PackageNotFound { .. })
    }
}

impl From<serde_json::Error> for StarTemplateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<StarTemplateError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| StarTemplateError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| StarTemplateError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

//! Error types for the instaname name generator.
//!
//! Every error carries the source location where it was created, following the
//! `Kind` + location pattern used across the workspace.

mod backend;
mod config;
mod generation;

pub use backend::{BackendError, BackendErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use generation::{
    BACKEND_FAILURE_MESSAGE, EMPTY_OUTPUT_MESSAGE, GenerationError, GenerationErrorKind,
    UNEXPECTED_MESSAGE,
};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum InstanameErrorKind {
    /// Name generation failed
    Generation(GenerationError),
    /// Generative backend failed outside of a generation call
    Backend(BackendError),
    /// Configuration could not be loaded
    Config(ConfigError),
}

impl std::fmt::Display for InstanameErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanameErrorKind::Generation(e) => write!(f, "{}", e),
            InstanameErrorKind::Backend(e) => write!(f, "{}", e),
            InstanameErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Instaname error with kind discrimination.
#[derive(Debug)]
pub struct InstanameError(Box<InstanameErrorKind>);

impl InstanameError {
    /// Create a new error from a kind.
    pub fn new(kind: InstanameErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &InstanameErrorKind {
        &self.0
    }
}

impl std::fmt::Display for InstanameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instaname Error: {}", self.0)
    }
}

impl std::error::Error for InstanameError {}

impl<T> From<T> for InstanameError
where
    T: Into<InstanameErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for instaname operations.
pub type InstanameResult<T> = std::result::Result<T, InstanameError>;

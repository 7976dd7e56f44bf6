//! Generation error types and their user-facing messages.

use crate::BackendErrorKind;

/// Message shown when the backend answered but produced nothing usable.
pub const EMPTY_OUTPUT_MESSAGE: &str =
    "Could not generate names. Please try a different description.";

/// Message shown when the backend could not be reached or failed.
pub const BACKEND_FAILURE_MESSAGE: &str =
    "The name generator is unavailable right now. Please try again.";

/// Message shown for any fault that was not anticipated.
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// The four ways a generation request can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Input failed validation and never reached the backend
    #[display("Invalid {field}: {message}")]
    Validation {
        /// Name of the offending form field
        field: String,
        /// Human-readable explanation
        message: String,
    },
    /// Backend responded but the content broke the output schema or was empty
    #[display("Empty or invalid generator output: {_0}")]
    EmptyOrInvalidOutput(String),
    /// Network, transport or backend-side fault
    #[display("Backend failure: {_0}")]
    BackendFailure(BackendErrorKind),
    /// Anything else, caught at the orchestrator boundary
    #[display("Unexpected failure: {_0}")]
    Unexpected(String),
}

impl GenerationErrorKind {
    /// The single human-readable message shown to the end user.
    ///
    /// Validation errors keep their field-specific text; every other kind maps
    /// to a generic message so backend details never leak to the caller.
    pub fn user_message(&self) -> String {
        match self {
            GenerationErrorKind::Validation { message, .. } => message.clone(),
            GenerationErrorKind::EmptyOrInvalidOutput(_) => EMPTY_OUTPUT_MESSAGE.to_string(),
            GenerationErrorKind::BackendFailure(_) => BACKEND_FAILURE_MESSAGE.to_string(),
            GenerationErrorKind::Unexpected(_) => UNEXPECTED_MESSAGE.to_string(),
        }
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use instaname_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::validation("description", "Description must be at least 10 characters.");
/// assert!(err.is_validation());
/// assert_eq!(err.user_message(), "Description must be at least 10 characters.");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    kind: GenerationErrorKind,
    line: u32,
    file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a field-level validation failure.
    #[track_caller]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::Validation {
            field: field.into(),
            message: message.into(),
        })
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }

    /// Line where the error was created.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where the error was created.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// See [`GenerationErrorKind::user_message`].
    pub fn user_message(&self) -> String {
        self.kind.user_message()
    }

    /// True when the request was rejected before reaching the backend.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, GenerationErrorKind::Validation { .. })
    }
}

impl From<crate::BackendError> for GenerationError {
    #[track_caller]
    fn from(err: crate::BackendError) -> Self {
        Self::new(GenerationErrorKind::BackendFailure(err.kind().clone()))
    }
}

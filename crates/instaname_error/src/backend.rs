//! Generative backend error types.

/// Failure conditions reported by a generative backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BackendErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to construct the backend client
    #[display("Failed to create backend client: {_0}")]
    ClientCreation(String),
    /// Network or transport level failure
    #[display("Backend request failed: {_0}")]
    Transport(String),
    /// Request exceeded the configured timeout
    #[display("Backend request timed out: {_0}")]
    Timeout(String),
    /// Backend answered with a non-success status
    #[display("HTTP {status_code} error: {message}")]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error body returned by the backend
        message: String,
    },
    /// Response envelope could not be decoded
    #[display("Malformed backend payload: {_0}")]
    MalformedPayload(String),
}

/// Backend error with source location tracking.
///
/// # Examples
///
/// ```
/// use instaname_error::{BackendError, BackendErrorKind};
///
/// let err = BackendError::new(BackendErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Backend Error: {} at line {} in {}", kind, line, file)]
pub struct BackendError {
    kind: BackendErrorKind,
    line: u32,
    file: &'static str,
}

impl BackendError {
    /// Create a new BackendError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BackendErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BackendErrorKind {
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
}

impl<T> From<T> for BackendError
where
    T: Into<BackendErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

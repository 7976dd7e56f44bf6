//! Configuration error types.

/// Ways loading configuration can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A source could not be read or merged
    #[display("Failed to load configuration: {_0}")]
    Load(String),
    /// Merged values did not match the expected shape
    #[display("Failed to parse configuration: {_0}")]
    Parse(String),
    /// A value was present but unusable
    #[display("Invalid {key}: {message}")]
    Invalid {
        /// Configuration key
        key: String,
        /// What is wrong with it
        message: String,
    },
}

/// Configuration error with source location tracking.
///
/// # Examples
///
/// ```
/// use instaname_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Parse("expected a string".to_string()));
/// assert!(format!("{}", err).contains("expected a string"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a [`ConfigErrorKind::Invalid`] value.
    #[track_caller]
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid {
            key: key.into(),
            message: message.into(),
        })
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
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

impl<T> From<T> for ConfigError
where
    T: Into<ConfigErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

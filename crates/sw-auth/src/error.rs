//! Error types for sw-auth.
//!
//! Covers credential loading and session storage. Login and refresh return
//! `serviceworks_client::Error` directly so callers can match on the error
//! taxonomy without unwrapping. Operations mixing both wrap the platform error
//! in [`ErrorKind::Api`].

/// Result type alias for sw-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sw-auth operations.
///
/// Error messages never include credential values.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Invalid credentials configuration.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The platform call failed.
    #[error(transparent)]
    Api(serviceworks_client::Error),
}

impl ErrorKind {
    /// The platform error, if this is one.
    pub fn api(&self) -> Option<&serviceworks_client::Error> {
        match self {
            ErrorKind::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::with_source(ErrorKind::Io(err.to_string()), err)
    }
}

impl From<serviceworks_client::Error> for Error {
    fn from(err: serviceworks_client::Error) -> Self {
        Error::new(ErrorKind::Api(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

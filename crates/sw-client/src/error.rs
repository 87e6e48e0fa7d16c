//! Error types for sw-client.
//!
//! [`ErrorKind`] splits into two families. Transport kinds mean the call did
//! not complete as expected; application kinds mean the platform answered and
//! reported a failure. Only application kinds map to an [`ErrorClass`].

use serde::Serialize;

/// Result type alias for sw-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sw-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}{}", context.as_deref().map(|c| format!(" :: {c}")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Serialized request/response context for diagnostics.
    pub context: Option<String>,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
            source: None,
        }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            context: None,
            source: Some(Box::new(source)),
        }
    }

    /// Attach a free-form context string, appending to any existing context.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        self.context = Some(match self.context.take() {
            Some(existing) => format!("{context} :: {existing}"),
            None => context,
        });
        self
    }

    /// Attach the serialized request and response to the error.
    ///
    /// Serialization failures degrade to `null` so the original error is
    /// always preserved.
    pub fn with_exchange<Req, Resp>(self, request: Option<&Req>, response: &Resp) -> Self
    where
        Req: Serialize + ?Sized,
        Resp: Serialize + ?Sized,
    {
        let request = request
            .and_then(|r| serde_json::to_string(r).ok())
            .unwrap_or_else(|| "null".to_string());
        let response = serde_json::to_string(response).unwrap_or_else(|_| "null".to_string());
        self.context(format!("{request} :: {response}"))
    }

    /// The taxonomy member for application errors, `None` for transport errors.
    pub fn class(&self) -> Option<ErrorClass> {
        self.kind.class()
    }

    /// Returns true if the call never completed (network, cancellation, bad payload).
    pub fn is_transport(&self) -> bool {
        self.kind.class().is_none()
    }

    /// Returns true if the session token is no longer usable and a fresh
    /// login is the remedy.
    pub fn needs_login(&self) -> bool {
        matches!(
            self.class(),
            Some(ErrorClass::InvalidCode) | Some(ErrorClass::AuthExpired)
        )
    }
}

/// Stable taxonomy of platform-reported failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Bad or expired session token.
    InvalidCode,
    /// Bad login credentials.
    InvalidUserPassword,
    /// Token revoked, detected via HTTP 401.
    AuthExpired,
    /// Anything the platform reported that has no dedicated member.
    Unclassified,
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Session token not valid.
    #[error("Token not valid{}", suffix(.0))]
    InvalidCode(String),

    /// Login rejected.
    #[error("Username or Password is invalid")]
    InvalidUserPassword,

    /// Session token expired or revoked (HTTP 401).
    #[error("Token expired{}", suffix(.0))]
    AuthExpired(String),

    /// Classified HTTP error body with no dedicated taxonomy member.
    #[error("ServiceWorks Error : {status} : {message} : {description}")]
    Api {
        status: u16,
        message: String,
        description: String,
    },

    /// 2xx status envelope reporting a failure with no dedicated taxonomy member.
    #[error("Bad response. Got status {status} :: message '{message}' :: {errors}")]
    Envelope {
        status: i64,
        message: String,
        errors: String,
    },

    /// The platform answered successfully but the payload was not usable.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Request timeout reported by the HTTP stack.
    #[error("Request timeout")]
    Timeout,

    /// The caller's deadline passed before the call completed.
    #[error("Deadline exceeded")]
    DeadlineExceeded,

    /// The caller cancelled the call.
    #[error("Request cancelled")]
    Cancelled,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Other transport failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A success body could not be decoded.
    #[error("JSON error: {0}")]
    Json(String),

    /// The request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

fn suffix(description: &str) -> String {
    if description.is_empty() {
        String::new()
    } else {
        format!(": {description}")
    }
}

impl ErrorKind {
    /// Taxonomy member for application kinds.
    pub fn class(&self) -> Option<ErrorClass> {
        match self {
            ErrorKind::InvalidCode(_) => Some(ErrorClass::InvalidCode),
            ErrorKind::InvalidUserPassword => Some(ErrorClass::InvalidUserPassword),
            ErrorKind::AuthExpired(_) => Some(ErrorClass::AuthExpired),
            ErrorKind::Api { .. }
            | ErrorKind::Envelope { .. }
            | ErrorKind::UnexpectedResponse(_) => Some(ErrorClass::Unclassified),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Json(err.to_string())
        } else {
            ErrorKind::Http(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}

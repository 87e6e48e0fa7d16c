//! The status envelope embedded in 2xx bodies.
//!
//! Many endpoints answer HTTP 200 and report the real outcome in
//! `{status, message, errors}`. `status == 1` is success; anything else is
//! looked up in [`QUIRKS`], a table of known platform responses. Status 0
//! means both "exception" and "empty result" depending on the message text.

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorClass, ErrorKind, Result};
use crate::serde_helpers::null_default;

/// Envelope status reporting success.
pub const STATUS_OK: i64 = 1;

/// Application-level outcome carried inside a successful HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiStatus {
    #[serde(default, alias = "Status")]
    pub status: i64,
    #[serde(default, alias = "Message", deserialize_with = "null_default")]
    pub message: String,
    #[serde(default, alias = "Errors")]
    pub errors: serde_json::Value,
}

#[derive(Debug, Clone, Copy)]
enum MessageMatch {
    /// Case-insensitive substring.
    Contains(&'static str),
    /// Case-insensitive equality.
    Equals(&'static str),
}

impl MessageMatch {
    fn matches(&self, message: &str) -> bool {
        match self {
            MessageMatch::Contains(needle) => message
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            MessageMatch::Equals(expected) => message.eq_ignore_ascii_case(expected),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    /// A benign status; the (possibly empty) payload is the answer.
    Accept,
    /// A known failure.
    Reject(ErrorClass),
}

#[derive(Debug, Clone, Copy)]
struct Quirk {
    status: i64,
    message: MessageMatch,
    resolution: Resolution,
}

/// Known non-success envelopes, checked in order.
const QUIRKS: &[Quirk] = &[
    Quirk {
        status: 3,
        message: MessageMatch::Contains("Username or Password is not valid"),
        resolution: Resolution::Reject(ErrorClass::InvalidUserPassword),
    },
    Quirk {
        status: 0,
        message: MessageMatch::Contains("Api Exception"),
        resolution: Resolution::Reject(ErrorClass::InvalidCode),
    },
    Quirk {
        status: 0,
        message: MessageMatch::Equals("No Jobs Found"),
        resolution: Resolution::Accept,
    },
    Quirk {
        status: 2,
        message: MessageMatch::Contains("invalid token"),
        resolution: Resolution::Reject(ErrorClass::InvalidCode),
    },
];

impl ApiStatus {
    /// A success envelope.
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK,
            ..Default::default()
        }
    }

    /// Returns true if the envelope reports success outright.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Interpret the envelope: `Ok(())` when the call succeeded or the status
    /// is a known benign one, otherwise the matching error.
    pub fn check(&self) -> Result<()> {
        if self.is_ok() {
            return Ok(());
        }

        let quirk = QUIRKS
            .iter()
            .find(|q| q.status == self.status && q.message.matches(&self.message));

        match quirk.map(|q| q.resolution) {
            Some(Resolution::Accept) => Ok(()),
            Some(Resolution::Reject(class)) => Err(self.rejection(class)),
            None => Err(self.rejection(ErrorClass::Unclassified)),
        }
    }

    fn rejection(&self, class: ErrorClass) -> Error {
        let kind = match class {
            ErrorClass::InvalidUserPassword => ErrorKind::InvalidUserPassword,
            ErrorClass::InvalidCode => ErrorKind::InvalidCode(self.message.clone()),
            ErrorClass::AuthExpired => ErrorKind::AuthExpired(self.message.clone()),
            ErrorClass::Unclassified => ErrorKind::Envelope {
                status: self.status,
                message: self.message.clone(),
                errors: serde_json::to_string(&self.errors)
                    .unwrap_or_else(|_| "null".to_string()),
            },
        };
        Error::new(kind)
    }
}

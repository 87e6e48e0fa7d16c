//! Response classification.
//!
//! A raw response is routed on its HTTP status before any payload decode:
//!
//! | status        | outcome                                             |
//! |---------------|-----------------------------------------------------|
//! | 410           | `ApiError` with status 410 and an empty message     |
//! | >= 500        | `ApiError` carrying the body verbatim               |
//! | 400..=499     | `ApiError` parsed from one of two body shapes       |
//! | < 400         | no error; the caller decodes the payload            |

use bytes::Bytes;
use serde::Deserialize;

use crate::error::{Error, ErrorKind};

/// Message the platform uses when a session grant is rejected.
pub const INVALID_GRANT: &str = "invalid_grant";

/// Marker text the platform uses for deleted jobs on non-410 responses.
pub const ARCHIVED_JOB: &str = "archived job";

/// Message recorded when a body parses but carries no usable message.
pub const UNKNOWN_FORMAT: &str = "Unknown error format";

const HTTP_GONE: u16 = 410;
const HTTP_UNAUTHORIZED: u16 = 401;

/// HTTP status plus raw body, consumed once by classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Normalized error record derived from a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiError {
    /// Text form of the failure. For a 5xx this is the body decoded lossily;
    /// invalid UTF-8 shows up as U+FFFD here and survives only in `body`.
    pub message: String,
    pub description: String,
    /// HTTP-equivalent status; may differ from the transport status.
    pub status_code: u16,
    /// Raw response body, byte for byte. Empty for 410.
    pub body: Bytes,
}

/// `{"error": {"message": "..."}}`
#[derive(Deserialize)]
struct NestedErrorBody {
    #[serde(alias = "Error")]
    error: NestedErrorMessage,
}

#[derive(Deserialize)]
struct NestedErrorMessage {
    #[serde(default, alias = "Message")]
    message: Option<String>,
}

/// `{"error": "...", "error_description": "...", "statusCode": 400}`
#[derive(Deserialize)]
struct FlatErrorBody {
    #[serde(default, alias = "Error")]
    error: Option<String>,
    #[serde(default, alias = "Error_Description")]
    error_description: Option<String>,
    #[serde(default, rename = "statusCode", alias = "StatusCode")]
    status_code: Option<i64>,
}

impl FlatErrorBody {
    /// Codes outside the HTTP range count as absent.
    fn status_code(&self) -> u16 {
        self.status_code
            .and_then(|code| u16::try_from(code).ok())
            .unwrap_or_default()
    }
}

impl ApiError {
    /// Parse an error body, trying each known shape in order.
    ///
    /// The nested shape is tried first: a flat body never satisfies it, but a
    /// nested body would decode as an empty flat one.
    pub fn from_body(body: &[u8]) -> Self {
        if let Ok(nested) = serde_json::from_slice::<NestedErrorBody>(body) {
            if let Some(message) = nested.error.message.filter(|m| !m.is_empty()) {
                let status_code = if message.contains(ARCHIVED_JOB) {
                    HTTP_GONE
                } else {
                    0
                };
                return Self {
                    message,
                    status_code,
                    ..Default::default()
                };
            }
        }

        let raw = String::from_utf8_lossy(body).into_owned();
        match serde_json::from_slice::<FlatErrorBody>(body) {
            Ok(flat) => {
                let status_code = flat.status_code();
                let message = flat.error.unwrap_or_default();
                if message.is_empty() {
                    return Self {
                        message: UNKNOWN_FORMAT.to_string(),
                        description: raw,
                        status_code,
                        ..Default::default()
                    };
                }
                Self {
                    message,
                    description: flat.error_description.unwrap_or_default(),
                    status_code,
                    ..Default::default()
                }
            }
            Err(err) => Self {
                message: err.to_string(),
                description: raw,
                ..Default::default()
            },
        }
    }

    /// Resolve this record to a taxonomy error.
    ///
    /// Pure: resolving the same record twice yields the same kind.
    pub fn to_error(&self) -> Error {
        let kind = if self.message == INVALID_GRANT {
            ErrorKind::InvalidCode(self.description.clone())
        } else if self.status_code == HTTP_UNAUTHORIZED {
            ErrorKind::AuthExpired(self.description.clone())
        } else {
            ErrorKind::Api {
                status: self.status_code,
                message: self.message.clone(),
                description: self.description.clone(),
            }
        };
        Error::new(kind)
    }

    /// Returns true if the platform reported the resource as deleted.
    pub fn is_gone(&self) -> bool {
        self.status_code == HTTP_GONE
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        err.to_error()
    }
}

/// Classify a raw response by HTTP status.
///
/// Returns `None` for statuses below 400; the body is then a payload to
/// decode.
pub fn classify(response: &RawResponse) -> Option<ApiError> {
    match response.status {
        HTTP_GONE => Some(ApiError {
            status_code: HTTP_GONE,
            ..Default::default()
        }),
        status if status >= 500 => Some(ApiError {
            message: response.text(),
            description: String::new(),
            status_code: status,
            body: response.body.clone(),
        }),
        status if status >= 400 => {
            let mut err = ApiError::from_body(&response.body);
            if err.status_code == 0 {
                err.status_code = status;
            }
            err.body = response.body.clone();
            Some(err)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorClass;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse::new(status, body.to_string())
    }

    #[test]
    fn test_success_statuses_are_not_classified() {
        assert!(classify(&raw(200, r#"{"status":1}"#)).is_none());
        assert!(classify(&raw(204, "")).is_none());
        assert!(classify(&raw(304, "")).is_none());
    }

    #[test]
    fn test_gone_with_empty_body() {
        let err = classify(&raw(410, "")).unwrap();
        assert_eq!(err.status_code, 410);
        assert!(err.message.is_empty());
        assert!(err.is_gone());
    }

    #[test]
    fn test_gone_ignores_body() {
        let err = classify(&raw(410, r#"{"error":{"message":"something"}}"#)).unwrap();
        assert_eq!(err.status_code, 410);
        assert!(err.message.is_empty());
    }

    #[test]
    fn test_server_errors_keep_body_verbatim() {
        for (status, body) in [
            (500, "<html><body>Runtime Error</body></html>"),
            (502, "Bad Gateway"),
            (503, r#"{"error":{"message":"not parsed"}}"#),
            (504, ""),
        ] {
            let err = classify(&raw(status, body)).unwrap();
            assert_eq!(err.message, body);
            assert_eq!(err.status_code, status);
            assert!(err.description.is_empty());
        }
    }

    #[test]
    fn test_server_error_keeps_raw_bytes() {
        let body: &[u8] = b"err \xff\xfe end";
        let err = classify(&RawResponse::new(502, body.to_vec())).unwrap();
        assert_eq!(&err.body[..], body);
        assert_eq!(err.message, "err \u{FFFD}\u{FFFD} end");
        assert_eq!(err.status_code, 502);
    }

    #[test]
    fn test_client_error_keeps_raw_bytes() {
        let body = r#"{"error":{"message":"Customer not found"}}"#;
        let err = classify(&raw(404, body)).unwrap();
        assert_eq!(&err.body[..], body.as_bytes());
    }

    #[test]
    fn test_nested_shape() {
        let err = classify(&raw(400, r#"{"error":{"message":"Customer not found"}}"#)).unwrap();
        assert_eq!(err.message, "Customer not found");
        assert_eq!(err.status_code, 400);
    }

    #[test]
    fn test_archived_job_message_means_gone() {
        for status in [400, 404, 409, 422] {
            let body = r#"{"error":{"message":"Cannot update archived job 5521"}}"#;
            let err = classify(&raw(status, body)).unwrap();
            assert_eq!(err.status_code, 410, "status {status}");
            assert!(err.is_gone());
        }
    }

    #[test]
    fn test_flat_shape() {
        let body = r#"{"error":"invalid_grant","error_description":"code expired","statusCode":400}"#;
        let err = classify(&raw(400, body)).unwrap();
        assert_eq!(err.message, "invalid_grant");
        assert_eq!(err.description, "code expired");
        assert_eq!(err.status_code, 400);
    }

    #[test]
    fn test_flat_shape_with_out_of_range_status() {
        for code in ["-1", "70000"] {
            let body = format!(
                r#"{{"error":"quota_exceeded","error_description":"daily limit","statusCode":{code}}}"#
            );
            let err = classify(&raw(429, &body)).unwrap();
            assert_eq!(err.message, "quota_exceeded");
            assert_eq!(err.description, "daily limit");
            assert_eq!(err.status_code, 429);
        }
    }

    #[test]
    fn test_flat_shape_without_status_gets_http_status() {
        let body = r#"{"error":"unauthorized","error_description":"revoked"}"#;
        let err = classify(&raw(401, body)).unwrap();
        assert_eq!(err.status_code, 401);
    }

    #[test]
    fn test_flat_status_overrides_transport_status() {
        let body = r#"{"error":"denied","statusCode":401}"#;
        let err = classify(&raw(400, body)).unwrap();
        assert_eq!(err.status_code, 401);
    }

    #[test]
    fn test_empty_nested_message_falls_through() {
        let body = r#"{"error":{"message":""}}"#;
        let err = classify(&raw(400, body)).unwrap();
        // the nested object cannot decode as a flat string, so this is the fallback
        assert_eq!(err.description, body);
        assert!(!err.message.is_empty());
        assert_eq!(err.status_code, 400);
    }

    #[test]
    fn test_unparseable_body_is_kept() {
        let body = "Bad Request - Invalid Hostname";
        let err = classify(&raw(400, body)).unwrap();
        assert_eq!(err.description, body);
        assert!(!err.message.is_empty());
        assert_eq!(err.status_code, 400);
    }

    #[test]
    fn test_object_without_error_field() {
        let body = r#"{"Message":"The request is invalid."}"#;
        let err = classify(&raw(400, body)).unwrap();
        assert_eq!(err.message, UNKNOWN_FORMAT);
        assert_eq!(err.description, body);
    }

    #[test]
    fn test_invalid_grant_resolves_to_invalid_code() {
        let err = ApiError {
            message: "invalid_grant".into(),
            description: "expired authorization code".into(),
            status_code: 400,
            ..Default::default()
        };
        let resolved = err.to_error();
        assert_eq!(resolved.class(), Some(ErrorClass::InvalidCode));
        assert!(resolved.to_string().contains("expired authorization code"));
    }

    #[test]
    fn test_unauthorized_resolves_to_auth_expired() {
        let err = ApiError {
            message: "unauthorized".into(),
            description: "token revoked".into(),
            status_code: 401,
            ..Default::default()
        };
        assert_eq!(err.to_error().class(), Some(ErrorClass::AuthExpired));
    }

    #[test]
    fn test_other_errors_are_generic_and_readable() {
        let err = ApiError {
            message: "Bad Gateway".into(),
            description: String::new(),
            status_code: 502,
            ..Default::default()
        };
        let resolved = err.to_error();
        assert_eq!(resolved.class(), Some(ErrorClass::Unclassified));
        assert_eq!(resolved.to_string(), "ServiceWorks Error : 502 : Bad Gateway : ");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let records = [
            ApiError {
                message: "invalid_grant".into(),
                ..Default::default()
            },
            ApiError {
                status_code: 401,
                ..Default::default()
            },
            ApiError {
                status_code: 410,
                ..Default::default()
            },
        ];
        for record in records {
            assert_eq!(record.to_error().class(), record.to_error().class());
            assert_eq!(record.to_error().to_string(), record.to_error().to_string());
        }
    }
}

//! Security utilities for ServiceWorks API operations.
//!
//! Session tokens, passwords and API keys travel in plain request headers.
//! Anything that ends up in a log line or a `Debug` rendering goes through the
//! helpers here first.

use std::sync::OnceLock;

/// Placeholder written in place of secret values.
pub const REDACTED: &str = "[REDACTED]";

/// Header names whose values are secrets.
pub const SECRET_HEADERS: &[&str] = &["Token", "Password", "ApiKey"];

const MAX_LOG_LENGTH: usize = 500;

/// Returns true if `name` carries a secret value (case-insensitive).
pub fn is_secret_header(name: &str) -> bool {
    SECRET_HEADERS.iter().any(|h| h.eq_ignore_ascii_case(name))
}

/// Return the header value, or the redaction marker for secret headers.
pub fn redact_header<'a>(name: &str, value: &'a str) -> &'a str {
    if is_secret_header(name) {
        REDACTED
    } else {
        value
    }
}

fn token_pattern() -> &'static regex_lite::Regex {
    static PATTERN: OnceLock<regex_lite::Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        regex_lite::Regex::new(r#"(?i)("?(?:token|password|apikey)"?\s*[:=]\s*"?)[^"&,\s}]+"#)
            .expect("static token pattern")
    })
}

/// Sanitize a response or request body before it is logged.
///
/// - Values keyed by `token`, `password` or `apikey` are replaced
/// - Output is truncated to 500 characters
pub fn sanitize_for_log(message: &str) -> String {
    let mut sanitized = token_pattern()
        .replace_all(message, format!("${{1}}{REDACTED}").as_str())
        .into_owned();

    if sanitized.len() > MAX_LOG_LENGTH {
        let mut cut = MAX_LOG_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}

//! Login credentials.

use crate::error::{Error, ErrorKind, Result};

pub const USERNAME_ENV_VAR: &str = "SERVICEWORKS_USERNAME";
pub const PASSWORD_ENV_VAR: &str = "SERVICEWORKS_PASSWORD";
pub const API_KEY_ENV_VAR: &str = "SERVICEWORKS_API_KEY";

/// Username, password and API key for the key-based login.
///
/// Password and API key are redacted in Debug output.
#[derive(Clone)]
pub struct LoginCredentials {
    username: String,
    password: String,
    api_key: String,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl LoginCredentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            api_key: api_key.into(),
        }
    }

    /// Load credentials from `SERVICEWORKS_USERNAME`, `SERVICEWORKS_PASSWORD`
    /// and `SERVICEWORKS_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let read = |name: &str| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::new(ErrorKind::EnvVar(name.to_string())))
        };

        let creds = Self::new(
            read(USERNAME_ENV_VAR)?,
            read(PASSWORD_ENV_VAR)?,
            read(API_KEY_ENV_VAR)?,
        );
        creds.validate()?;
        Ok(creds)
    }

    /// Reject credentials with empty fields before a round trip is wasted.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("username", &self.username),
            ("password", &self.password),
            ("api key", &self.api_key),
        ] {
            if value.trim().is_empty() {
                return Err(Error::new(ErrorKind::InvalidCredentials(format!(
                    "{field} is empty"
                ))));
            }
        }
        Ok(())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Same credentials with a different password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

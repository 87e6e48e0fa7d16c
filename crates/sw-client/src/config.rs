//! Client configuration.

use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Environment variable naming an alternate (e.g. QA) deployment.
pub const URL_ENV_VAR: &str = "SERVICEWORKS_URL";

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base endpoint. `None` targets production.
    pub base_url: Option<String>,
    /// Request timeout enforced by the HTTP stack.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Default configuration, pointed at `SERVICEWORKS_URL` when it is set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(URL_ENV_VAR) {
            if !url.trim().is_empty() {
                config.base_url = Some(url);
            }
        }
        config
    }

    /// Resolve the configured base into the endpoint every path is joined to.
    ///
    /// Empty or unset resolves to production. Any other value gets the `api`
    /// segment appended unless it already ends with it.
    pub fn resolved_base_url(&self) -> Result<String> {
        let resolved = match self.base_url.as_deref().map(str::trim) {
            None | Some("") => crate::PRODUCTION_URL.to_string(),
            Some(url) if url.ends_with("api") => url.to_string(),
            Some(url) if url.ends_with('/') => format!("{url}api"),
            Some(url) => format!("{url}/api"),
        };

        let parsed = url::Url::parse(&resolved)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            ))));
        }

        Ok(resolved)
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Point the client at an alternate deployment.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

//! The request dispatcher every ServiceWorks call goes through.

use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::context::CallContext;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::{classify, ApiError, RawResponse};
use crate::security::sanitize_for_log;

/// Outcome of a call that completed at the transport level.
#[derive(Debug)]
pub enum Reply<T> {
    /// The decoded success payload.
    Payload(T),
    /// The platform answered with an error status.
    Rejected(ApiError),
}

impl<T> Reply<T> {
    /// Collapse into a `Result`, resolving a rejection to the error taxonomy.
    pub fn into_result(self) -> Result<T> {
        match self {
            Reply::Payload(payload) => Ok(payload),
            Reply::Rejected(err) => Err(err.to_error()),
        }
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<&ApiError> {
        match self {
            Reply::Rejected(err) => Some(err),
            Reply::Payload(_) => None,
        }
    }
}

/// HTTP client for the ServiceWorks API.
///
/// Holds nothing but the HTTP stack and an immutable base URL, so a single
/// instance can be cloned and shared across tasks.
#[derive(Clone)]
pub struct ServiceWorksClient {
    inner: reqwest::Client,
    base_url: String,
    config: ClientConfig,
}

impl std::fmt::Debug for ServiceWorksClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceWorksClient")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ServiceWorksClient {
    /// Create a new client. The base URL is resolved here, once.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.resolved_base_url()?;

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            base_url,
            config,
        })
    }

    /// Create a client for the production deployment.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Create a client for an alternate deployment.
    pub fn with_base_url(url: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::builder().with_base_url(url).build())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The resolved base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a relative path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Execute a request and classify the response.
    ///
    /// The outer `Result` carries transport failures: network errors,
    /// cancellation, deadline, or a success body that does not decode as `T`.
    /// Platform-reported failures come back as [`Reply::Rejected`].
    #[instrument(skip(self, ctx, request), fields(method = ?request.method, path = %request.path))]
    pub async fn dispatch<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        request: RequestBuilder,
    ) -> Result<Reply<T>> {
        let raw = self
            .execute(ctx, &request)
            .await
            .map_err(|e| e.context(exchange_label(&request)))?;

        if let Some(rejection) = classify(&raw) {
            if self.config.enable_tracing {
                info!(
                    status = raw.status,
                    classified_status = rejection.status_code,
                    message = %sanitize_for_log(&rejection.message),
                    "Request rejected"
                );
            }
            return Ok(Reply::Rejected(rejection));
        }

        let payload = serde_json::from_slice(&raw.body)
            .map_err(|e| Error::from(e).context(exchange_label(&request)))?;
        Ok(Reply::Payload(payload))
    }

    /// Dispatch and resolve any rejection to the error taxonomy.
    pub async fn send<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        request: RequestBuilder,
    ) -> Result<T> {
        self.dispatch(ctx, request).await?.into_result()
    }

    /// Execute a request and return the raw status and body, unclassified.
    pub async fn execute(&self, ctx: &CallContext, request: &RequestBuilder) -> Result<RawResponse> {
        let url = self.url(&request.path_and_query()?);

        let mut req = self.inner.request(request.method.to_reqwest(), &url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(ref body) = request.body {
            req = req.body(body.clone());
        }

        if self.config.enable_tracing {
            debug!(method = ?request.method, url = %url, "Sending request");
        }

        let tracing_enabled = self.config.enable_tracing;
        ctx.run(async move {
            let response = req.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;

            if tracing_enabled {
                if status < 400 {
                    debug!(status, content_length = body.len(), "Response received");
                } else {
                    info!(
                        status,
                        body = %sanitize_for_log(&String::from_utf8_lossy(&body)),
                        "Non-success response"
                    );
                }
            }

            Ok(RawResponse { status, body })
        })
        .await
    }
}

fn exchange_label(request: &RequestBuilder) -> String {
    format!("{} : {}", request.path, sanitize_for_log(&request.body_text()))
}

//! ServiceWorks resource client.
//!
//! Wraps `ServiceWorksClient` from `sw-client`; each resource family lives in
//! its own file as an `impl` block on [`ServiceWorksRestClient`].

use serviceworks_client::{ClientConfig, Result, ServiceWorksClient};

mod crew;
mod customers;
mod jobs;

/// Typed access to customers, jobs and crew.
///
/// # Example
///
/// ```rust,ignore
/// use serviceworks_rest::{NewCustomer, ServiceWorksRestClient};
///
/// let client = ServiceWorksRestClient::new()?;
///
/// let found = client.search_customers(&ctx, &token, "nate dogg").await?;
/// let created = client
///     .create_customer(&ctx, &token, &NewCustomer::new("Nate", "Dogg"))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct ServiceWorksRestClient {
    client: ServiceWorksClient,
}

impl ServiceWorksRestClient {
    /// Client for the production deployment.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: ServiceWorksClient::default_client()?,
        })
    }

    /// Client for an alternate deployment, e.g. QA.
    pub fn with_base_url(url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: ServiceWorksClient::with_base_url(url)?,
        })
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: ServiceWorksClient::new(config)?,
        })
    }

    /// Share an existing client, e.g. the one used for login.
    pub fn from_client(client: ServiceWorksClient) -> Self {
        Self { client }
    }

    /// Get the underlying ServiceWorksClient.
    pub fn inner(&self) -> &ServiceWorksClient {
        &self.client
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

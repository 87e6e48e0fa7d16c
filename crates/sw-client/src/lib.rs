//! # sw-client
//!
//! Core HTTP dispatch and error classification for the ServiceWorks API.
//!
//! Every ServiceWorks call funnels through [`ServiceWorksClient::dispatch`],
//! which builds the request, executes it under a [`CallContext`], and turns
//! whatever came back into either a decoded payload or a classified error.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Resource Endpoints                       │
//! │  (sw-auth: login/refresh, sw-rest: customers, jobs, crew)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   ServiceWorksClient                        │
//! │  - Base URL resolution, headers, JSON body                  │
//! │  - Races the transport against the CallContext              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │          classify (status branch + dual-format body)        │
//! │          ApiStatus::check (embedded status envelope)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use serviceworks_client::{CallContext, RequestBuilder, ServiceWorksClient};
//!
//! let client = ServiceWorksClient::new(ClientConfig::default())?;
//! let ctx = CallContext::with_timeout(Duration::from_secs(60));
//!
//! let reply: Reply<EmployeeEnvelope> = client
//!     .dispatch(&ctx, RequestBuilder::get("Configuration/GetUserLists").token(&token))
//!     .await?;
//! let envelope = reply.into_result()?;
//! envelope.api_status.check()?;
//! ```

mod client;
mod config;
mod context;
mod envelope;
mod error;
mod request;
mod response;
pub mod security;
pub mod serde_helpers;

pub use client::{Reply, ServiceWorksClient};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use context::CallContext;
pub use envelope::ApiStatus;
pub use error::{Error, ErrorClass, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::{classify, ApiError, RawResponse};

/// Production API base.
pub const PRODUCTION_URL: &str = "https://apiapp.service.works/api";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("serviceworks-api/", env!("CARGO_PKG_VERSION"));

/// Header carrying the session token on authenticated calls.
pub const TOKEN_HEADER: &str = "Token";

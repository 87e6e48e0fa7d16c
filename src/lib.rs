//! # serviceworks-api
//!
//! A Rust client for the ServiceWorks field-service API.
//!
//! Covers login and token refresh, customer search and creation, job
//! creation, scheduling and listing, and crew listing. Failures resolve to a
//! small taxonomy so callers can react to a bad token or bad credentials
//! without parsing messages.
//!
//! ## Security
//!
//! - Tokens, passwords and API keys are redacted in Debug output
//! - Tracing skips credential parameters
//! - Logged bodies are sanitized and truncated
//!
//! ## Crates
//!
//! - **serviceworks-client** - request dispatch, error classification, status envelope
//! - **serviceworks-auth** - key-based login, token refresh, session storage
//! - **serviceworks-rest** - customers, jobs and scheduling, crew
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! use serviceworks_api::auth::{AuthClient, LoginCredentials};
//! use serviceworks_api::client::{CallContext, ServiceWorksClient};
//! use serviceworks_api::rest::ServiceWorksRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http = ServiceWorksClient::default_client()?;
//!     let ctx = CallContext::with_timeout(Duration::from_secs(60));
//!
//!     let session = AuthClient::new(http.clone())
//!         .login(&ctx, &LoginCredentials::from_env()?)
//!         .await?;
//!
//!     let rest = ServiceWorksRestClient::from_client(http);
//!     for employee in rest.crew_list(&ctx, &session.token).await? {
//!         println!("{} {}", employee.employee_id, employee.full_name());
//!     }
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "auth")]
pub use serviceworks_auth as auth;
#[cfg(feature = "client")]
pub use serviceworks_client as client;
#[cfg(feature = "rest")]
pub use serviceworks_rest as rest;

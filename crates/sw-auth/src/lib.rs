//! # sw-auth
//!
//! ServiceWorks authentication.
//!
//! ## Security
//!
//! - Passwords, API keys and session tokens are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Stored sessions are written with owner-only permissions on Unix
//!
//! ## Supported Flows
//!
//! - **API-key login** - username + password + API key for a session token
//! - **Token refresh** - exchange a session token for a fresh one (the
//!   platform expects this roughly every 30 days)
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! use serviceworks_auth::{AuthClient, FileTokenStorage, LoginCredentials, TokenStorage};
//! use serviceworks_client::{CallContext, ServiceWorksClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auth = AuthClient::new(ServiceWorksClient::default_client()?);
//!     let creds = LoginCredentials::from_env()?;
//!
//!     let ctx = CallContext::with_timeout(Duration::from_secs(60));
//!     let session = auth.login(&ctx, &creds).await?;
//!
//!     FileTokenStorage::new()?.save("default", &session)?;
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod login;
mod storage;

pub use credentials::{LoginCredentials, API_KEY_ENV_VAR, PASSWORD_ENV_VAR, USERNAME_ENV_VAR};
pub use error::{Error, ErrorKind, Result};
pub use login::{AuthClient, Session};
pub use storage::{default_token_dir, FileTokenStorage, TokenStorage, REFRESH_INTERVAL_DAYS};

use std::sync::Once;
use std::time::Duration;

use serviceworks_api::auth::{AuthClient, LoginCredentials, Session};
use serviceworks_api::client::{CallContext, ClientConfig, ServiceWorksClient};
use serviceworks_api::rest::ServiceWorksRestClient;

static TRACING: Once = Once::new();

/// Route client logs to the test output, filtered by RUST_LOG.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Every live call must finish inside a minute.
pub fn ctx() -> CallContext {
    CallContext::with_timeout(Duration::from_secs(60))
}

/// HTTP client for the deployment named by SERVICEWORKS_URL, else production.
pub fn http_client() -> ServiceWorksClient {
    init_tracing();
    ServiceWorksClient::new(ClientConfig::from_env()).expect("SERVICEWORKS_URL is not a valid URL")
}

/// Credentials from the environment.
///
/// Panics with setup instructions when they are missing; these tests must not
/// silently pass without a real account.
pub fn credentials() -> LoginCredentials {
    LoginCredentials::from_env().unwrap_or_else(|e| {
        panic!(
            "\n\nIntegration tests need a ServiceWorks account: {e}\n\
             Export SERVICEWORKS_USERNAME, SERVICEWORKS_PASSWORD and SERVICEWORKS_API_KEY \
             (and optionally SERVICEWORKS_URL for QA).\n\n"
        )
    })
}

pub fn auth_client() -> AuthClient {
    AuthClient::new(http_client())
}

pub fn rest_client() -> ServiceWorksRestClient {
    ServiceWorksRestClient::from_client(http_client())
}

/// Log in with the environment's credentials.
pub async fn session() -> Session {
    auth_client()
        .login(&ctx(), &credentials())
        .await
        .expect("login should succeed with the configured credentials")
}

//! Key-based login and token refresh.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serviceworks_client::serde_helpers::null_default;
use serviceworks_client::{ApiStatus, CallContext, RequestBuilder, Result, ServiceWorksClient};
use tracing::{info, instrument};

use crate::credentials::LoginCredentials;
use crate::storage::{FileTokenStorage, TokenStorage};

const LOGIN_PATH: &str = "Login/LoginWithKey";
const REFRESH_PATH: &str = "Login/RefreshToken";

/// An authenticated ServiceWorks session.
///
/// The token is redacted in Debug output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Session token, sent as the `Token` header on every resource call.
    pub token: String,
    /// Phone number with its country code prefixed.
    pub phone: String,
    /// IANA-style time zone name of the company.
    pub time_zone_name: String,
    /// Company id as a decimal string.
    pub company_id: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("phone", &self.phone)
            .field("time_zone_name", &self.time_zone_name)
            .field("company_id", &self.company_id)
            .finish()
    }
}

/// Login and refresh share one flat response: envelope fields sit next to the
/// session fields.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    #[serde(flatten)]
    api_status: ApiStatus,
    #[serde(
        default,
        alias = "Companyid",
        alias = "companyId",
        alias = "CompanyId",
        deserialize_with = "null_default"
    )]
    companyid: i64,
    #[serde(default, alias = "Token", deserialize_with = "null_default")]
    token: String,
    #[serde(default, alias = "Phone", deserialize_with = "null_default")]
    phone: String,
    #[serde(default, alias = "PhoneCode", deserialize_with = "null_default")]
    phone_code: String,
    #[serde(default, alias = "TimeZoneName", deserialize_with = "null_default")]
    time_zone_name: String,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("api_status", &self.api_status)
            .field("companyid", &self.companyid)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl LoginResponse {
    fn into_session(self) -> Result<Session> {
        self.api_status.check()?;

        Ok(Session {
            token: self.token,
            phone: format!("{}{}", self.phone_code, self.phone),
            time_zone_name: self.time_zone_name,
            company_id: self.companyid.to_string(),
        })
    }
}

/// Authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: ServiceWorksClient,
}

impl AuthClient {
    pub fn new(client: ServiceWorksClient) -> Self {
        Self { client }
    }

    /// The underlying HTTP client.
    pub fn inner(&self) -> &ServiceWorksClient {
        &self.client
    }

    /// Exchange username, password and API key for a session.
    ///
    /// Wrong credentials surface as `ErrorKind::InvalidUserPassword`.
    #[instrument(skip(self, ctx, credentials), fields(username = %credentials.username()))]
    pub async fn login(&self, ctx: &CallContext, credentials: &LoginCredentials) -> Result<Session> {
        let request = RequestBuilder::post(LOGIN_PATH).headers([
            ("UserName", credentials.username()),
            ("Password", credentials.password()),
            ("ApiKey", credentials.api_key()),
        ]);

        let response: LoginResponse = self.client.send(ctx, request).await?;
        let session = response.into_session()?;

        info!(company_id = %session.company_id, "Logged in");
        Ok(session)
    }

    /// Exchange a session token for a fresh one.
    ///
    /// Tokens lapse after roughly 30 days without a refresh.
    #[instrument(skip(self, ctx, token))]
    pub async fn refresh_token(&self, ctx: &CallContext, token: &str) -> Result<Session> {
        let request = RequestBuilder::post(REFRESH_PATH).token(token);

        let response: LoginResponse = self.client.send(ctx, request).await?;
        let session = response.into_session()?;

        info!(company_id = %session.company_id, "Token refreshed");
        Ok(session)
    }

    /// Load the session stored under `key`, refreshing it first if it is due.
    ///
    /// A refreshed session replaces the stored one. `Ok(None)` when nothing
    /// is stored; a refresh the platform rejects comes back as
    /// [`ErrorKind::Api`](crate::ErrorKind::Api) and leaves the file alone.
    #[instrument(skip(self, ctx, storage))]
    pub async fn resume(
        &self,
        ctx: &CallContext,
        storage: &FileTokenStorage,
        key: &str,
        now: DateTime<Utc>,
    ) -> crate::Result<Option<Session>> {
        let Some(session) = storage.load(key)? else {
            return Ok(None);
        };
        if !storage.refresh_due(key, now)? {
            return Ok(Some(session));
        }

        let fresh = self.refresh_token(ctx, &session.token).await?;
        storage.save(key, &fresh)?;
        Ok(Some(fresh))
    }
}

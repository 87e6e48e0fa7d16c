//! Request descriptors for the dispatcher.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::Result;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Content type set on every request that carries a JSON body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// A single call's method, relative path, headers and optional JSON body.
///
/// Paths are relative to the resolved base (e.g. `Job/GetJob`). The body is
/// serialized when it is attached, so a serialization failure surfaces before
/// anything goes on the wire.
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) path: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) body: Option<Vec<u8>>,
}

impl std::fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(k, v)| (k.as_str(), crate::security::redact_header(k, v)))
            .collect();
        f.debug_struct("RequestBuilder")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("headers", &headers)
            .field("query_params", &self.query_params)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HashMap::new(),
            query_params: Vec::new(),
            body: None,
        }
    }

    /// Create a GET request builder.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Get, path)
    }

    /// Create a POST request builder.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Post, path)
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add every header from a map.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.headers.insert(name.into(), value.into());
        }
        self
    }

    /// Set the session token header.
    pub fn token(self, token: impl Into<String>) -> Self {
        self.header(crate::TOKEN_HEADER, token)
    }

    /// Add a query parameter. Encoded when the URL is composed.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Set JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        self.headers
            .insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
        Ok(self)
    }

    /// Get the method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// Get the relative path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up a header value.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// The serialized body as text, empty when there is none.
    pub fn body_text(&self) -> String {
        self.body
            .as_deref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default()
    }

    /// Relative path plus encoded query string.
    pub(crate) fn path_and_query(&self) -> Result<String> {
        let path = self.path.trim_start_matches('/');
        if self.query_params.is_empty() {
            return Ok(path.to_string());
        }
        let query = serde_urlencoded::to_string(&self.query_params)?;
        Ok(format!("{path}?{query}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = RequestBuilder::get("Job/GetJob")
            .token("token123")
            .header("X-Custom", "value")
            .query("fromdate", "11/30/2023");

        assert_eq!(req.method(), RequestMethod::Get);
        assert_eq!(req.path(), "Job/GetJob");
        assert_eq!(req.header_value("Token"), Some("token123"));
        assert_eq!(req.header_value("X-Custom"), Some("value"));
        assert_eq!(req.query_params.len(), 1);
        assert!(req.body.is_none());
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let data = serde_json::json!({"CustomerId": 20144});
        let req = RequestBuilder::post("Job/CreateNewJob").json(&data).unwrap();

        assert_eq!(req.body_text(), r#"{"CustomerId":20144}"#);
        assert_eq!(req.header_value("Content-Type"), Some(JSON_CONTENT_TYPE));
    }

    #[test]
    fn test_no_body_no_content_type() {
        let req = RequestBuilder::post("Login/LoginWithKey");
        assert_eq!(req.header_value("Content-Type"), None);
        assert_eq!(req.body_text(), "");
    }

    #[test]
    fn test_headers_from_map() {
        let mut map = HashMap::new();
        map.insert("UserName", "dispatch");
        map.insert("ApiKey", "k");
        let req = RequestBuilder::post("Login/LoginWithKey").headers(map);
        assert_eq!(req.header_value("UserName"), Some("dispatch"));
        assert_eq!(req.header_value("ApiKey"), Some("k"));
    }

    #[test]
    fn test_path_and_query_encoding() {
        let req = RequestBuilder::get("/Job/GetCustomerSearch").query("CustomerName", "nate dogg");
        assert_eq!(
            req.path_and_query().unwrap(),
            "Job/GetCustomerSearch?CustomerName=nate+dogg"
        );

        let req = RequestBuilder::get("Job/GetJob")
            .query("fromdate", "11/30/2023")
            .query("todate", "12/01/2023");
        assert_eq!(
            req.path_and_query().unwrap(),
            "Job/GetJob?fromdate=11%2F30%2F2023&todate=12%2F01%2F2023"
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let req = RequestBuilder::post("Login/LoginWithKey")
            .header("Password", "hunter2")
            .token("secret-token");
        let debug = format!("{req:?}");
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }
}

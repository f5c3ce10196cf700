//! Low-level HTTP transport: `HttpTransport`.
//!
//! Executes exactly one request per call and hands back the raw status and
//! body. Parsing, status policy and logging happen one layer up in
//! [`TradeApiClient`](crate::client::TradeApiClient).

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client;

use crate::error::{ConfigError, TransportError};

/// Header carrying the API token.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP verbs used by the Trade API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the server certificate is verified for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsVerification {
    #[default]
    Enabled,
    /// Accept any certificate. Only ever applied to the order endpoints, and
    /// only when the client was built with this explicitly.
    Disabled,
}

/// One outgoing request.
#[derive(Debug, Clone, Copy)]
pub struct HttpRequest<'a> {
    pub method: HttpMethod,
    pub url: &'a str,
    pub headers: &'a HeaderMap,
    pub query: &'a [(&'static str, String)],
    pub json_body: Option<&'a serde_json::Value>,
    pub tls: TlsVerification,
}

/// Status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Single-shot transport. Holds no connection state between calls.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Transport without a client-side timeout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Execute one request on a fresh session.
    ///
    /// The session is owned by this future: it is torn down when the call
    /// returns, fails, or is dropped by the caller mid-flight.
    pub async fn execute(&self, request: HttpRequest<'_>) -> Result<RawResponse, TransportError> {
        let session = self.session(request.tls)?;

        let mut req = session
            .request(request.method.into(), request.url)
            .headers(request.headers.clone());
        if !request.query.is_empty() {
            req = req.query(request.query);
        }
        if let Some(body) = request.json_body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(RawResponse { status, body })
    }

    fn session(&self, tls: TlsVerification) -> Result<Client, TransportError> {
        let mut builder = Client::builder().pool_max_idle_per_host(0);

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if tls == TlsVerification::Disabled {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        Ok(builder.build()?)
    }
}

/// Headers sent with every request: `accept` and the API key.
pub fn default_headers(api_key: &str) -> Result<HeaderMap, ConfigError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut key = HeaderValue::from_str(api_key).map_err(|_| ConfigError::InvalidHeader {
        name: API_KEY_HEADER,
    })?;
    key.set_sensitive(true);
    headers.insert(HeaderName::from_static("x-api-key"), key);

    Ok(headers)
}

//! High-level client: `TradeApiClient` with nested sub-client accessors.
//!
//! Each endpoint family has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the per-call pipeline (send, status policy,
//! parse, log) and the accessor methods.

use std::time::Duration;

use reqwest::header::HeaderMap;
use tracing::instrument::WithSubscriber;
use tracing::{Dispatch, Instrument};

use crate::config::ClientConfig;
use crate::domain::candles::client::Candles;
use crate::domain::order::client::Orders;
use crate::domain::portfolio::client::Portfolio;
use crate::domain::security::client::Securities;
use crate::domain::token::client::Tokens;
use crate::error::{ConfigError, SchemaError, SdkError};
use crate::http::{
    default_headers, HttpMethod, HttpRequest, HttpTransport, RawResponse, TlsVerification,
};
use crate::shared::schema::excerpt;
use crate::shared::QueryParams;

// Re-export sub-client types for convenience.
pub use crate::domain::candles::client::Candles as CandlesClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::portfolio::client::Portfolio as PortfolioClient;
pub use crate::domain::security::client::Securities as SecuritiesClient;
pub use crate::domain::token::client::Tokens as TokensClient;

/// The primary entry point for the Trade API.
///
/// Provides nested sub-client accessors for each endpoint family:
/// `client.candles()`, `client.orders()`, etc.
///
/// Holds only read-only state, so a clone can be moved into each task that
/// needs one and concurrent calls never contend.
#[derive(Debug, Clone)]
pub struct TradeApiClient {
    pub(crate) base_url: String,
    pub(crate) headers: HeaderMap,
    pub(crate) transport: HttpTransport,
    pub(crate) logger: Option<Dispatch>,
    pub(crate) order_tls: TlsVerification,
    pub(crate) strict_status: bool,
    pub(crate) client_id: Option<String>,
}

impl TradeApiClient {
    /// Client for the public base URL with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SdkError> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> TradeApiClientBuilder {
        TradeApiClientBuilder::new(api_key)
    }

    /// Client for the token, base URL and trading account in `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, SdkError> {
        let mut builder = Self::builder(config.api_token.clone()).base_url(&config.api_url);
        if let Some(client_id) = &config.client_id {
            builder = builder.client_id(client_id.clone());
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Trading account id carried over from configuration, if any.
    pub fn default_client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { client: self }
    }

    pub fn candles(&self) -> Candles<'_> {
        Candles { client: self }
    }

    pub fn portfolio(&self) -> Portfolio<'_> {
        Portfolio { client: self }
    }

    pub fn securities(&self) -> Securities<'_> {
        Securities { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    // ── Call pipeline ────────────────────────────────────────────────────

    /// Run one call: send, apply the status policy, parse the body.
    ///
    /// Everything runs inside a `trade_api` span under the injected
    /// dispatch. Each failure is logged once, here, before it is returned.
    pub(crate) async fn call<T, F>(&self, call: Call, parse: F) -> Result<T, SdkError>
    where
        F: FnOnce(&str) -> Result<T, SchemaError>,
    {
        let fut = async move {
            let span = tracing::info_span!("trade_api", endpoint = call.endpoint);
            self.run(call, parse).instrument(span).await
        };
        match &self.logger {
            Some(dispatch) => fut.with_subscriber(dispatch.clone()).await,
            None => fut.await,
        }
    }

    /// Log a failure detected before any request was sent.
    pub(crate) fn reject(&self, endpoint: &'static str, err: SdkError) -> SdkError {
        self.in_scope(|| tracing::error!(endpoint, error = %err, "request rejected"));
        err
    }

    fn in_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        match &self.logger {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }

    async fn run<T, F>(&self, call: Call, parse: F) -> Result<T, SdkError>
    where
        F: FnOnce(&str) -> Result<T, SchemaError>,
    {
        let raw = self.send(&call).await?;

        let require_ok = self.strict_status || call.status == StatusPolicy::Required;
        if require_ok && !raw.is_ok() {
            tracing::error!(
                endpoint = call.endpoint,
                status = raw.status,
                body = %excerpt(&raw.body),
                "unexpected HTTP status"
            );
            return Err(SdkError::ApiRequest {
                status: raw.status,
                body: raw.body,
            });
        }

        parse(&raw.body).map_err(|e| {
            tracing::error!(
                endpoint = call.endpoint,
                status = raw.status,
                error = %e,
                payload = %excerpt(&raw.body),
                "response failed schema validation"
            );
            SdkError::Schema(e)
        })
    }

    async fn send(&self, call: &Call) -> Result<RawResponse, SdkError> {
        let url = format!("{}{}", self.base_url, call.path);
        tracing::debug!(method = %call.method, %url, "sending request");

        let request = HttpRequest {
            method: call.method,
            url: &url,
            headers: &self.headers,
            query: &call.query,
            json_body: call.body.as_ref(),
            tls: call.tls,
        };
        let raw = self.transport.execute(request).await.map_err(|e| {
            tracing::error!(endpoint = call.endpoint, error = %e, "transport failure");
            SdkError::Transport(e)
        })?;

        tracing::debug!(status = raw.status, bytes = raw.body.len(), "response received");
        Ok(raw)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Call description
// ═════════════════════════════════════════════════════════════════════════════

/// Whether a non-200 status fails the call before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusPolicy {
    /// Parse whatever comes back, unless the client is in strict mode.
    Lenient,
    /// Anything but 200 is an `ApiRequest` error.
    Required,
}

/// One endpoint invocation, as assembled by a sub-client.
#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub(crate) endpoint: &'static str,
    pub(crate) method: HttpMethod,
    pub(crate) path: &'static str,
    pub(crate) query: QueryParams,
    pub(crate) body: Option<serde_json::Value>,
    pub(crate) status: StatusPolicy,
    pub(crate) tls: TlsVerification,
}

impl Call {
    pub(crate) fn new(endpoint: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            endpoint,
            method,
            path,
            query: Vec::new(),
            body: None,
            status: StatusPolicy::Lenient,
            tls: TlsVerification::Enabled,
        }
    }

    pub(crate) fn get(endpoint: &'static str, path: &'static str) -> Self {
        Self::new(endpoint, HttpMethod::Get, path)
    }

    pub(crate) fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub(crate) fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub(crate) fn status_checked(mut self) -> Self {
        self.status = StatusPolicy::Required;
        self
    }

    pub(crate) fn tls(mut self, tls: TlsVerification) -> Self {
        self.tls = tls;
        self
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TradeApiClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
    logger: Option<Dispatch>,
    order_tls: TlsVerification,
    strict_status: bool,
    client_id: Option<String>,
}

impl TradeApiClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: None,
            logger: None,
            order_tls: TlsVerification::Enabled,
            strict_status: false,
            client_id: None,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout. Unbounded when not set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Subscriber that receives the client's spans and events.
    /// Without one, events go to whatever default is active at the call site.
    pub fn logger(mut self, dispatch: Dispatch) -> Self {
        self.logger = Some(dispatch);
        self
    }

    /// Certificate verification for order placement and order listing.
    ///
    /// `TlsVerification::Disabled` accepts any certificate on those two calls
    /// only. Every other endpoint always verifies.
    pub fn order_tls_verification(mut self, tls: TlsVerification) -> Self {
        self.order_tls = tls;
        self
    }

    /// Require HTTP 200 on every endpoint, not just the order calls.
    pub fn strict_status(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    /// Trading account id exposed through [`TradeApiClient::default_client_id`].
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn build(self) -> Result<TradeApiClient, SdkError> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url).into());
        }

        let transport = match self.timeout {
            Some(timeout) => HttpTransport::with_timeout(timeout),
            None => HttpTransport::new(),
        };

        Ok(TradeApiClient {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            headers: default_headers(&self.api_key)?,
            transport,
            logger: self.logger,
            order_tls: self.order_tls,
            strict_status: self.strict_status,
            client_id: self.client_id,
        })
    }
}

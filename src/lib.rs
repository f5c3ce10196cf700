//! # Finam Trade API client
//!
//! A typed async Rust client for the Finam Trade REST API: candles,
//! portfolio, securities, order placement, listing and cancellation, and
//! access token checks.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: scaled-number codec, response envelope, schema mapping, domain models
//! 2. **Ambient**: configuration from the environment and injectable logging sinks
//! 3. **HTTP transport**: `HttpTransport`, one fresh session per request
//! 4. **High-level client**: `TradeApiClient` with one sub-client per endpoint family
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use finam_trade_api::prelude::*;
//!
//! let config = ClientConfig::from_dotenv()?;
//! let logging = init_logging(&LogConfig::default())?;
//! let client = TradeApiClient::builder(config.api_token.clone())
//!     .base_url(&config.api_url)
//!     .logger(logging.dispatch())
//!     .build()?;
//!
//! let token = client.tokens().check().await?;
//! let params = DayCandlesParams::new("TQBR", "GAZP", DayTimeFrame::D1, from, to);
//! let candles = client.candles().day(&params).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Scaled numbers, the response envelope and the parse layer.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Ambient ─────────────────────────────────────────────────────────

/// Environment and `.env` configuration.
pub mod config;

/// Console and file logging sinks.
pub mod logging;

// ── Layer 3: HTTP transport ──────────────────────────────────────────────────

#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `TradeApiClient`, the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{decode, Envelope, ErrorPayload, ScaledNumber, ScalingError};

    // Domain types: candles
    pub use crate::domain::candles::{
        Candle, CandleSeries, DayCandlesParams, DayCandlesResponse, DayTimeFrame,
        IntradayCandlesParams, IntradayCandlesResponse, IntradayTimeFrame,
    };

    // Domain types: orders
    pub use crate::domain::order::{
        BuySell, Condition, ConditionType, NewOrder, NewOrderError, Order, OrderPlacement,
        OrderProperty, OrderStatus, OrdersData, OrdersParams, OrdersResponse, ValidBefore,
        ValidBeforeType,
    };

    // Domain types: portfolio, securities, tokens
    pub use crate::domain::portfolio::{PortfolioParams, PortfolioResponse};
    pub use crate::domain::security::SecuritiesResponse;
    pub use crate::domain::token::{TokenValidation, TokenValidationResponse};

    // Errors
    pub use crate::error::{ConfigError, SchemaError, SdkError, SdkResult, TransportError};

    // Configuration + logging
    pub use crate::config::ClientConfig;
    pub use crate::logging::{init_logging, LogConfig, LoggingError, LoggingHandle};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CandlesClient, OrdersClient, PortfolioClient, SecuritiesClient, TokensClient,
        TradeApiClient, TradeApiClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::TlsVerification;
}

//! Order domain: order records, placement, listing and cancellation.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod request;
pub mod wire;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::shared::schema::{excerpt, parse_wire};
use crate::shared::{serde_util, Envelope};

pub use request::{NewOrder, NewOrderError, OrdersParams};

/// Closed string enums shared by the wire and request sides.
///
/// Generates `as_str`, `Display` and a `FromStr` that rejects anything
/// outside the listed variants.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok($name::$variant),)+
                    _ => Err(UnknownVariant(s.to_string())),
                }
            }
        }
    };
}

/// A string that names no variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant `{}`", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

// ─── Enums ───────────────────────────────────────────────────────────────────

string_enum!(
    /// Order lifecycle status.
    OrderStatus { None, Active, Matched, Cancelled }
);

string_enum!(
    /// Order direction.
    BuySell { Buy, Sell }
);

string_enum!(
    /// Trigger condition of a conditional order.
    ConditionType { Bid, BidOrLast, Ask, AskOrLast, Time, CovDown, CovUp, LastUp, LastDown }
);

string_enum!(
    /// How long an order stays on the book.
    ValidBeforeType { TillEndSession, TillCancelled, ExactTime }
);

string_enum!(
    /// Handling of the unfilled remainder.
    OrderProperty { PutInQueue, CancelBalance, ImmOrCancel }
);

// ─── Condition / ValidBefore ─────────────────────────────────────────────────

/// Order trigger. Used both in order records and in [`NewOrder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub kind: ConditionType,
    pub price: f64,
    #[serde(default, serialize_with = "serde_util::opt_timestamp::serialize")]
    pub time: Option<DateTime<Utc>>,
}

impl Condition {
    pub fn new(kind: ConditionType, price: f64) -> Self {
        Self {
            kind,
            price,
            time: None,
        }
    }

    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            kind: ConditionType::Time,
            price: 0.0,
            time: Some(time),
        }
    }
}

/// Order validity. Used both in order records and in [`NewOrder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidBefore {
    #[serde(rename = "type")]
    pub kind: ValidBeforeType,
    #[serde(default, serialize_with = "serde_util::opt_timestamp::serialize")]
    pub time: Option<DateTime<Utc>>,
}

impl ValidBefore {
    pub fn till_end_session() -> Self {
        Self {
            kind: ValidBeforeType::TillEndSession,
            time: None,
        }
    }

    pub fn till_cancelled() -> Self {
        Self {
            kind: ValidBeforeType::TillCancelled,
            time: None,
        }
    }

    pub fn exact_time(time: DateTime<Utc>) -> Self {
        Self {
            kind: ValidBeforeType::ExactTime,
            time: Some(time),
        }
    }
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// An order as reported by `GET /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_no: i64,
    pub transaction_id: i64,
    pub security_code: String,
    pub client_id: String,
    pub status: OrderStatus,
    pub buy_sell: BuySell,
    pub created_at: Option<DateTime<Utc>>,
    pub price: f64,
    pub quantity: i64,
    pub balance: i64,
    pub message: Option<String>,
    pub currency: String,
    pub condition: Condition,
    pub valid_before: ValidBefore,
    pub accepted_at: DateTime<Utc>,
    pub security_board: String,
    pub market: String,
}

/// `data` of the order listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersData {
    pub client_id: String,
    pub orders: Vec<Order>,
}

/// Order listing result. Errors arrive as a bare string.
pub type OrdersResponse = Envelope<OrdersData, String>;

/// Acknowledgement of a placed order (the unwrapped `data` object).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlacement {
    pub client_id: String,
    pub transaction_id: i64,
    pub security_code: String,
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

pub(crate) fn parse_orders(body: &str) -> Result<OrdersResponse, SchemaError> {
    crate::shared::parse::<wire::OrdersWire, _>("OrdersResponse", body)
}

/// Placement replies carry the same envelope; only `data` is handed back.
pub(crate) fn parse_placement(body: &str) -> Result<OrderPlacement, SchemaError> {
    let wire: wire::OrderPlacementWire = parse_wire("OrderPlacementResponse", body)?;
    let envelope = Envelope::try_from_wire(wire, Ok)?;
    envelope
        .into_result()
        .map_err(|error| SchemaError::validation("data", "order placement", excerpt(&error)))
}

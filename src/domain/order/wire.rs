//! Wire types for the order endpoints.
//!
//! Closed-set fields and timestamps stay as strings here; they are checked
//! in `convert.rs` where the full field path is known.

use serde::Deserialize;

use super::OrderPlacement;
use crate::shared::WireEnvelope;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConditionWire {
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ValidBeforeWire {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderWire {
    pub order_no: i64,
    pub transaction_id: i64,
    pub security_code: String,
    pub client_id: String,
    pub status: String,
    pub buy_sell: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub balance: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub currency: String,
    pub condition: ConditionWire,
    pub valid_before: ValidBeforeWire,
    pub accepted_at: String,
    pub security_board: String,
    pub market: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrdersDataWire {
    pub client_id: String,
    pub orders: Vec<OrderWire>,
}

pub type OrdersWire = WireEnvelope<OrdersDataWire, String>;

/// Placement `data` has no closed-set fields and deserializes straight into the domain type.
pub type OrderPlacementWire = WireEnvelope<OrderPlacement, String>;

//! Typed request bodies and query parameters for the order endpoints.

use serde::Serialize;
use thiserror::Error;

use super::{BuySell, Condition, ConditionType, OrderProperty, ValidBefore, ValidBeforeType};
use crate::error::SdkError;
use crate::shared::{flag, QueryParams};

// ─── NewOrder ────────────────────────────────────────────────────────────────

/// Body of `POST /orders`.
///
/// Construct with [`NewOrder::limit`] or [`NewOrder::market`] and refine with
/// the `with_*` setters. The order is validated before it is serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub client_id: String,
    pub security_board: String,
    pub security_code: String,
    pub buy_sell: BuySell,
    pub quantity: i64,
    pub use_credit: bool,
    /// `None` places a market order.
    pub price: Option<f64>,
    pub property: OrderProperty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_before: Option<ValidBefore>,
}

impl NewOrder {
    pub fn limit(
        client_id: impl Into<String>,
        security_board: impl Into<String>,
        security_code: impl Into<String>,
        buy_sell: BuySell,
        quantity: i64,
        price: f64,
    ) -> Self {
        Self {
            price: Some(price),
            ..Self::market(client_id, security_board, security_code, buy_sell, quantity)
        }
    }

    pub fn market(
        client_id: impl Into<String>,
        security_board: impl Into<String>,
        security_code: impl Into<String>,
        buy_sell: BuySell,
        quantity: i64,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            security_board: security_board.into(),
            security_code: security_code.into(),
            buy_sell,
            quantity,
            use_credit: false,
            price: None,
            property: OrderProperty::PutInQueue,
            condition: None,
            valid_before: None,
        }
    }

    pub fn with_credit(mut self, use_credit: bool) -> Self {
        self.use_credit = use_credit;
        self
    }

    pub fn with_property(mut self, property: OrderProperty) -> Self {
        self.property = property;
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_valid_before(mut self, valid_before: ValidBefore) -> Self {
        self.valid_before = Some(valid_before);
        self
    }

    /// Check the order before it leaves the process.
    pub fn validate(&self) -> Result<(), NewOrderError> {
        for (name, value) in [
            ("clientId", &self.client_id),
            ("securityBoard", &self.security_board),
            ("securityCode", &self.security_code),
        ] {
            if value.trim().is_empty() {
                return Err(NewOrderError::EmptyField(name));
            }
        }
        if self.quantity <= 0 {
            return Err(NewOrderError::NonPositiveQuantity(self.quantity));
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price <= 0.0 {
                return Err(NewOrderError::InvalidPrice(price));
            }
        }
        if let Some(condition) = &self.condition {
            if condition.kind == ConditionType::Time && condition.time.is_none() {
                return Err(NewOrderError::MissingConditionTime);
            }
        }
        if let Some(valid_before) = &self.valid_before {
            if valid_before.kind == ValidBeforeType::ExactTime && valid_before.time.is_none() {
                return Err(NewOrderError::MissingValidBeforeTime);
            }
        }
        Ok(())
    }

    /// Validated JSON body.
    pub(crate) fn to_body(&self) -> Result<serde_json::Value, SdkError> {
        self.validate()
            .map_err(|e| SdkError::InvalidRequest(e.to_string()))?;
        Ok(serde_json::to_value(self)?)
    }
}

/// Why a [`NewOrder`] was refused locally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NewOrderError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(i64),

    #[error("price must be a positive finite number, got {0}")]
    InvalidPrice(f64),

    #[error("a Time condition needs a time")]
    MissingConditionTime,

    #[error("an ExactTime validity needs a time")]
    MissingValidBeforeTime,
}

// ─── OrdersParams ────────────────────────────────────────────────────────────

/// Query for `GET /orders`. Every status is included unless switched off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersParams {
    pub client_id: String,
    pub include_matched: bool,
    pub include_canceled: bool,
    pub include_active: bool,
}

impl OrdersParams {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            include_matched: true,
            include_canceled: true,
            include_active: true,
        }
    }

    pub fn with_matched(mut self, include: bool) -> Self {
        self.include_matched = include;
        self
    }

    pub fn with_canceled(mut self, include: bool) -> Self {
        self.include_canceled = include;
        self
    }

    pub fn with_active(mut self, include: bool) -> Self {
        self.include_active = include;
        self
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        vec![
            ("ClientId", self.client_id.clone()),
            ("IncludeMatched", flag(self.include_matched)),
            ("IncludeCanceled", flag(self.include_canceled)),
            ("IncludeActive", flag(self.include_active)),
        ]
    }
}

pub(crate) fn cancel_query(client_id: &str, transaction_id: i64) -> QueryParams {
    vec![
        ("ClientId", client_id.to_string()),
        ("TransactionId", transaction_id.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use serde_json::json;

    fn sample() -> NewOrder {
        NewOrder::limit("C1", "TQBR", "SBER", BuySell::Buy, 10, 160.5)
    }

    #[test]
    fn test_serialized_shape() {
        let order = sample()
            .with_condition(Condition::new(ConditionType::Bid, 160.5))
            .with_valid_before(ValidBefore::till_end_session());
        let body = order.to_body().unwrap();
        assert_eq!(
            body,
            json!({
                "clientId": "C1",
                "securityBoard": "TQBR",
                "securityCode": "SBER",
                "buySell": "Buy",
                "quantity": 10,
                "useCredit": false,
                "price": 160.5,
                "property": "PutInQueue",
                "condition": {"type": "Bid", "price": 160.5, "time": null},
                "validBefore": {"type": "TillEndSession", "time": null}
            })
        );
    }

    #[test]
    fn test_market_order_omits_optional_blocks() {
        let body = NewOrder::market("C1", "TQBR", "SBER", BuySell::Sell, 1)
            .to_body()
            .unwrap();
        assert_eq!(body["price"], serde_json::Value::Null);
        assert!(body.get("condition").is_none());
        assert!(body.get("validBefore").is_none());
    }

    #[rstest]
    #[case::zero_quantity(
        NewOrder { quantity: 0, ..sample() },
        NewOrderError::NonPositiveQuantity(0)
    )]
    #[case::negative_quantity(
        NewOrder { quantity: -5, ..sample() },
        NewOrderError::NonPositiveQuantity(-5)
    )]
    #[case::empty_code(
        NewOrder::limit("C1", "TQBR", " ", BuySell::Buy, 1, 1.0),
        NewOrderError::EmptyField("securityCode")
    )]
    #[case::zero_price(
        NewOrder::limit("C1", "TQBR", "SBER", BuySell::Buy, 1, 0.0),
        NewOrderError::InvalidPrice(0.0)
    )]
    #[case::time_without_time(
        sample().with_condition(Condition::new(ConditionType::Time, 0.0)),
        NewOrderError::MissingConditionTime
    )]
    #[case::exact_time_without_time(
        sample().with_valid_before(ValidBefore { kind: ValidBeforeType::ExactTime, time: None }),
        NewOrderError::MissingValidBeforeTime
    )]
    fn test_validation_rejects(#[case] order: NewOrder, #[case] expected: NewOrderError) {
        assert_eq!(order.validate().unwrap_err(), expected);
        assert!(matches!(order.to_body(), Err(SdkError::InvalidRequest(_))));
    }

    #[test]
    fn test_nan_price_rejected() {
        let order = NewOrder::limit("C1", "TQBR", "SBER", BuySell::Buy, 1, f64::NAN);
        assert!(matches!(order.validate(), Err(NewOrderError::InvalidPrice(_))));
    }

    #[test]
    fn test_timed_order_accepted() {
        let at = Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap();
        let order = sample()
            .with_condition(Condition::at(at))
            .with_valid_before(ValidBefore::exact_time(at));
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_orders_query_defaults() {
        assert_eq!(
            OrdersParams::new("C1").with_canceled(false).to_query(),
            vec![
                ("ClientId", "C1".to_string()),
                ("IncludeMatched", "true".to_string()),
                ("IncludeCanceled", "false".to_string()),
                ("IncludeActive", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_cancel_query() {
        assert_eq!(
            cancel_query("C1", 40481018),
            vec![
                ("ClientId", "C1".to_string()),
                ("TransactionId", "40481018".to_string()),
            ]
        );
    }
}

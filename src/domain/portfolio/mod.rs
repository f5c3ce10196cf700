//! Portfolio domain. The `data` object is passed through untyped.

#[cfg(feature = "http")]
pub mod client;

use serde_json::Value;

use crate::error::SchemaError;
use crate::shared::schema::parse_wire;
use crate::shared::{flag, Envelope, ErrorPayload, QueryParams, WireEnvelope};

pub type PortfolioResponse = Envelope<Value, ErrorPayload>;

/// Query for `GET /portfolio`. All content blocks are requested by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioParams {
    pub client_id: String,
    pub include_currencies: bool,
    pub include_money: bool,
    pub include_positions: bool,
    pub include_max_buy_sell: bool,
}

impl PortfolioParams {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            include_currencies: true,
            include_money: true,
            include_positions: true,
            include_max_buy_sell: true,
        }
    }

    pub fn with_currencies(mut self, include: bool) -> Self {
        self.include_currencies = include;
        self
    }

    pub fn with_money(mut self, include: bool) -> Self {
        self.include_money = include;
        self
    }

    pub fn with_positions(mut self, include: bool) -> Self {
        self.include_positions = include;
        self
    }

    pub fn with_max_buy_sell(mut self, include: bool) -> Self {
        self.include_max_buy_sell = include;
        self
    }

    pub(crate) fn to_query(&self) -> QueryParams {
        vec![
            ("ClientId", self.client_id.clone()),
            ("Content.IncludeCurrencies", flag(self.include_currencies)),
            ("Content.IncludeMoney", flag(self.include_money)),
            ("Content.IncludePositions", flag(self.include_positions)),
            ("Content.IncludeMaxBuySell", flag(self.include_max_buy_sell)),
        ]
    }
}

pub(crate) fn parse_response(body: &str) -> Result<PortfolioResponse, SchemaError> {
    let wire: WireEnvelope<Value, ErrorPayload> = parse_wire("PortfolioResponse", body)?;
    Envelope::try_from_wire(wire, Ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_flags_lowercase() {
        let query = PortfolioParams::new("C1").with_max_buy_sell(false).to_query();
        assert_eq!(
            query,
            vec![
                ("ClientId", "C1".to_string()),
                ("Content.IncludeCurrencies", "true".to_string()),
                ("Content.IncludeMoney", "true".to_string()),
                ("Content.IncludePositions", "true".to_string()),
                ("Content.IncludeMaxBuySell", "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_data_kept_untyped() {
        let body = r#"{"data":{"clientId":"C1","equity":1520.75,"positions":[{"securityCode":"SBER","balance":10}]},"error":null}"#;
        let resp = parse_response(body).unwrap();
        let data = resp.data().unwrap();
        assert_eq!(data["positions"][0]["securityCode"], "SBER");
        assert_eq!(data["equity"], 1520.75);
    }

    #[test]
    fn test_structured_error() {
        let body = r#"{"error":{"code":"PermissionDenied","message":"No access to account"}}"#;
        let resp = parse_response(body).unwrap();
        assert_eq!(resp.error().unwrap().code, "PermissionDenied");
    }

    #[test]
    fn test_malformed_error_object() {
        let err = parse_response(r#"{"error":{"code":"X"}}"#).unwrap_err();
        assert_eq!(err.field(), "error.message");
    }
}

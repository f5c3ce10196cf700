//! Integration tests for the Trade API types.
//!
//! These tests go through the public parse path (body → wire → domain) and
//! the public request types, without any network access.

use finam_trade_api::domain::candles::wire::{DayCandlesWire, IntradayCandlesWire};
use finam_trade_api::domain::order::wire::{OrderPlacementWire, OrdersWire};
use finam_trade_api::prelude::*;
use finam_trade_api::shared::parse;
use finam_trade_api::shared::schema::parse_wire;
use rstest::rstest;
use rust_decimal_macros::dec;

// =============================================================================
// Scaled numbers
// =============================================================================

mod scaled_numbers {
    use super::*;

    #[rstest]
    #[case(20125, 2, dec!(201.25))]
    #[case(-5, 1, dec!(-0.5))]
    #[case(7, 0, dec!(7))]
    #[case(1, 8, dec!(0.00000001))]
    fn test_decode(#[case] num: i64, #[case] scale: i64, #[case] expected: rust_decimal::Decimal) {
        assert_eq!(decode(num, scale).unwrap(), expected);
    }

    #[test]
    fn test_scaled_number_deserialize() {
        let n: ScaledNumber = serde_json::from_str(r#"{"num": 16050, "scale": 2}"#).unwrap();
        assert_eq!(n.decode().unwrap(), dec!(160.50));
    }

    #[test]
    fn test_negative_scale() {
        assert_eq!(decode(1, -1), Err(ScalingError::InvalidScale(-1)));
    }
}

// =============================================================================
// Candles
// =============================================================================

mod candle_types {
    use super::*;

    const DAY_BODY: &str = r#"{
        "data": {
            "candles": [
                {"date": "2024-03-10", "open": {"num": 20125, "scale": 2}, "close": {"num": 20130, "scale": 2},
                 "high": {"num": 20200, "scale": 2}, "low": {"num": 20050, "scale": 2}, "volume": 1000},
                {"date": "2024-03-11", "open": {"num": 20130, "scale": 2}, "close": {"num": 19980, "scale": 2},
                 "high": {"num": 20210, "scale": 2}, "low": {"num": 19950, "scale": 2}, "volume": 2350}
            ]
        },
        "error": null
    }"#;

    fn parse_day(body: &str) -> Result<DayCandlesResponse, SchemaError> {
        parse::<DayCandlesWire, _>("DayCandlesResponse", body)
    }

    #[test]
    fn test_day_candles_deserialize() {
        let resp = parse_day(DAY_BODY).unwrap();
        let series = resp.into_result().unwrap();
        assert_eq!(series.len(), 2);
        let closes: Vec<_> = series.iter().map(|c| c.close).collect();
        assert_eq!(closes, vec![dec!(201.30), dec!(199.80)]);
        assert_eq!(series.candles[1].volume, 2350);
    }

    #[test]
    fn test_day_candles_parse_is_deterministic() {
        assert_eq!(parse_day(DAY_BODY).unwrap(), parse_day(DAY_BODY).unwrap());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = r#"{"data": {"candles": [], "nextPage": "abc"}, "error": null, "meta": {}}"#;
        let resp = parse_day(body).unwrap();
        assert!(resp.data().unwrap().is_empty());
    }

    #[test]
    fn test_missing_candles_array() {
        let err = parse_day(r#"{"data": {}}"#).unwrap_err();
        assert_eq!(err, SchemaError::validation("data.candles", "required field", "missing"));
    }

    #[test]
    fn test_both_halves_null() {
        let err = parse_day(r#"{"data": null, "error": null}"#).unwrap_err();
        assert_eq!(err.field(), "data");
    }

    #[test]
    fn test_intraday_negative_scale() {
        let body = r#"{"data": {"candles": [
            {"timestamp": "2024-03-04T10:00:00Z", "open": {"num": 1, "scale": -3}, "close": {"num": 1, "scale": 0},
             "high": {"num": 1, "scale": 0}, "low": {"num": 1, "scale": 0}, "volume": 1}
        ]}}"#;
        let err =
            parse::<IntradayCandlesWire, IntradayCandlesResponse>("IntradayCandlesResponse", body)
                .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidScale { ref field, source: ScalingError::InvalidScale(-3) }
                if field == "data.candles[0].open"
        ));
    }

    #[test]
    fn test_candle_serialize() {
        let candle = Candle {
            time: "2024-03-10".to_string(),
            open: dec!(201.25),
            close: dec!(201.30),
            high: dec!(202.00),
            low: dec!(200.50),
            volume: 1000,
        };
        let json = serde_json::to_value(&candle).unwrap();
        assert_eq!(json["open"], "201.25");
        assert_eq!(json["volume"], 1000);
    }
}

// =============================================================================
// Orders
// =============================================================================

mod order_types {
    use super::*;

    fn orders_body(status: &str) -> String {
        format!(
            r#"{{
                "data": {{
                    "clientId": "C1",
                    "orders": [{{
                        "orderNo": 28553,
                        "transactionId": 40481018,
                        "securityCode": "SBER",
                        "clientId": "C1",
                        "status": "{status}",
                        "buySell": "Sell",
                        "createdAt": "2024-03-04T09:59:58Z",
                        "price": 160.5,
                        "quantity": 10,
                        "balance": 4,
                        "message": "partially filled",
                        "currency": "RUB",
                        "condition": {{"type": "LastUp", "price": 161.0, "time": null}},
                        "validBefore": {{"type": "TillCancelled"}},
                        "acceptedAt": "2024-03-04T10:00:00+03:00",
                        "securityBoard": "TQBR",
                        "market": "Stock",
                        "extraField": true
                    }}]
                }},
                "error": null
            }}"#
        )
    }

    fn parse_orders(body: &str) -> Result<OrdersResponse, SchemaError> {
        parse::<OrdersWire, _>("OrdersResponse", body)
    }

    #[test]
    fn test_orders_response_deserialize() {
        let resp = parse_orders(&orders_body("Matched")).unwrap();
        let data = resp.data().unwrap();
        assert_eq!(data.client_id, "C1");
        let order = &data.orders[0];
        assert_eq!(order.status, OrderStatus::Matched);
        assert_eq!(order.buy_sell, BuySell::Sell);
        assert_eq!(order.condition.kind, ConditionType::LastUp);
        assert_eq!(order.valid_before.kind, ValidBeforeType::TillCancelled);
        assert!(order.valid_before.time.is_none());
        assert_eq!(order.message.as_deref(), Some("partially filled"));
        assert_eq!(order.accepted_at.to_rfc3339(), "2024-03-04T07:00:00+00:00");
    }

    #[rstest]
    #[case("None")]
    #[case("Active")]
    #[case("Matched")]
    #[case("Cancelled")]
    fn test_known_statuses(#[case] status: &str) {
        let resp = parse_orders(&orders_body(status)).unwrap();
        assert_eq!(resp.data().unwrap().orders[0].status.as_str(), status);
    }

    #[test]
    fn test_unknown_status() {
        let err = parse_orders(&orders_body("Frozen")).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownEnumValue {
                field: "data.orders[0].status".to_string(),
                value: "Frozen".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_condition_price_keeps_path() {
        let body = orders_body("Active").replace(r#""price": 161.0, "#, "");
        let err = parse_orders(&body).unwrap_err();
        assert_eq!(
            err,
            SchemaError::validation("data.orders[0].condition.price", "required field", "missing")
        );
    }

    #[test]
    fn test_wrong_quantity_type_keeps_path() {
        let body = orders_body("Active").replace(r#""quantity": 10"#, r#""quantity": "ten""#);
        let err = parse_orders(&body).unwrap_err();
        assert_eq!(err.field(), "data.orders[0].quantity");
    }

    #[test]
    fn test_orders_serialize_with_wire_names() {
        let resp = parse_orders(&orders_body("Active")).unwrap();
        let data = resp.into_result().unwrap();
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["clientId"], "C1");
        let order = &json["orders"][0];
        assert_eq!(order["orderNo"], 28553);
        assert_eq!(order["transactionId"], 40481018);
        assert_eq!(order["buySell"], "Sell");
        assert_eq!(order["validBefore"]["type"], "TillCancelled");
        assert_eq!(order["securityBoard"], "TQBR");
        assert!(order.get("transaction_id").is_none());

        let back: OrdersData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_bare_string_error() {
        let resp = parse_orders(r#"{"data": null, "error": "Client C9 not found"}"#).unwrap();
        assert_eq!(resp.error().map(String::as_str), Some("Client C9 not found"));
    }

    #[test]
    fn test_placement_envelope() {
        let body = r#"{"data": {"clientId": "C1", "transactionId": 7, "securityCode": "GAZP"}, "error": null}"#;
        let wire: OrderPlacementWire = parse_wire("OrderPlacementResponse", body).unwrap();
        let placement = wire.data.unwrap();
        assert_eq!(placement.transaction_id, 7);
        assert_eq!(placement.security_code, "GAZP");
    }

    #[test]
    fn test_new_order_serialize() {
        let order = NewOrder::limit("C1", "TQBR", "SBER", BuySell::Buy, 10, 160.5)
            .with_credit(true)
            .with_property(OrderProperty::CancelBalance)
            .with_valid_before(ValidBefore::till_cancelled());
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["clientId"], "C1");
        assert_eq!(json["buySell"], "Buy");
        assert_eq!(json["useCredit"], true);
        assert_eq!(json["property"], "CancelBalance");
        assert_eq!(json["validBefore"]["type"], "TillCancelled");
        assert!(json.get("condition").is_none());
    }

    #[test]
    fn test_new_order_validation() {
        let order = NewOrder::limit("C1", "TQBR", "SBER", BuySell::Buy, 0, 160.5);
        assert_eq!(order.validate(), Err(NewOrderError::NonPositiveQuantity(0)));
    }
}

// =============================================================================
// Tokens, portfolio, securities
// =============================================================================

mod untyped_payloads {
    use super::*;
    use finam_trade_api::shared::WireEnvelope;

    #[test]
    fn test_token_validation_deserialize() {
        let body = r#"{"data": {"id": 12}, "error": null}"#;
        let wire: WireEnvelope<TokenValidation, serde_json::Value> =
            parse_wire("TokenValidationResponse", body).unwrap();
        let resp = TokenValidationResponse::try_from(wire).unwrap();
        assert_eq!(resp.into_result().unwrap().id, 12);
    }

    #[test]
    fn test_error_payload_without_data() {
        let payload: ErrorPayload =
            serde_json::from_str(r#"{"code": "Unavailable", "message": "Try later"}"#).unwrap();
        assert_eq!(payload.to_string(), "Unavailable: Try later");
        assert!(payload.data.is_none());
    }
}

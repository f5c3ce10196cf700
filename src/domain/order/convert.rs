//! Conversions from wire orders to domain orders.

use super::wire::{ConditionWire, OrderWire, OrdersDataWire, OrdersWire, ValidBeforeWire};
use super::{Condition, Order, OrdersData, OrdersResponse, ValidBefore};
use crate::error::SchemaError;
use crate::shared::schema::{parse_enum, parse_optional_timestamp, parse_timestamp};
use crate::shared::Envelope;

impl ConditionWire {
    fn convert(self, path: &str) -> Result<Condition, SchemaError> {
        Ok(Condition {
            kind: parse_enum(format!("{path}.type"), self.kind)?,
            price: self.price,
            time: parse_optional_timestamp(format!("{path}.time"), self.time)?,
        })
    }
}

impl ValidBeforeWire {
    fn convert(self, path: &str) -> Result<ValidBefore, SchemaError> {
        Ok(ValidBefore {
            kind: parse_enum(format!("{path}.type"), self.kind)?,
            time: parse_optional_timestamp(format!("{path}.time"), self.time)?,
        })
    }
}

impl OrderWire {
    fn convert(self, index: usize) -> Result<Order, SchemaError> {
        let path = format!("data.orders[{index}]");
        Ok(Order {
            status: parse_enum(format!("{path}.status"), self.status)?,
            buy_sell: parse_enum(format!("{path}.buySell"), self.buy_sell)?,
            created_at: parse_optional_timestamp(format!("{path}.createdAt"), self.created_at)?,
            accepted_at: parse_timestamp(format!("{path}.acceptedAt"), &self.accepted_at)?,
            condition: self.condition.convert(&format!("{path}.condition"))?,
            valid_before: self.valid_before.convert(&format!("{path}.validBefore"))?,
            order_no: self.order_no,
            transaction_id: self.transaction_id,
            security_code: self.security_code,
            client_id: self.client_id,
            price: self.price,
            quantity: self.quantity,
            balance: self.balance,
            message: self.message,
            currency: self.currency,
            security_board: self.security_board,
            market: self.market,
        })
    }
}

impl TryFrom<OrdersDataWire> for OrdersData {
    type Error = SchemaError;

    fn try_from(wire: OrdersDataWire) -> Result<Self, Self::Error> {
        let orders = wire
            .orders
            .into_iter()
            .enumerate()
            .map(|(i, o)| o.convert(i))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(OrdersData {
            client_id: wire.client_id,
            orders,
        })
    }
}

impl TryFrom<OrdersWire> for OrdersResponse {
    type Error = SchemaError;

    fn try_from(wire: OrdersWire) -> Result<Self, Self::Error> {
        Envelope::try_from_wire(wire, OrdersData::try_from)
    }
}

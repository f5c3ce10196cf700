//! Orders sub-client: place, list, cancel.

use crate::client::{Call, TradeApiClient};
use crate::domain::order::request::cancel_query;
use crate::domain::order::{self, NewOrder, OrderPlacement, OrdersParams, OrdersResponse};
use crate::error::SdkError;
use crate::http::HttpMethod;

pub struct Orders<'a> {
    pub(crate) client: &'a TradeApiClient,
}

impl<'a> Orders<'a> {
    /// Place an order. `POST /orders`.
    ///
    /// Any status other than 200 fails with [`SdkError::ApiRequest`]. A
    /// 200 reply without `data` fails with a schema error carrying the
    /// server's error text.
    pub async fn place(&self, new_order: &NewOrder) -> Result<OrderPlacement, SdkError> {
        let call = self.place_call(new_order)?;
        self.client.call(call, order::parse_placement).await
    }

    /// List orders for an account. `GET /orders`, status-checked.
    pub async fn list(&self, params: &OrdersParams) -> Result<OrdersResponse, SdkError> {
        self.client.call(self.list_call(params), order::parse_orders).await
    }

    /// Cancel by transaction id. `DELETE /orders`.
    ///
    /// The reply is returned exactly as received.
    pub async fn cancel(&self, client_id: &str, transaction_id: i64) -> Result<String, SdkError> {
        let call = self.cancel_call(client_id, transaction_id);
        self.client.call(call, |body| Ok(body.to_string())).await
    }

    /// Validates the order; a refused order is logged and never sent.
    pub(crate) fn place_call(&self, new_order: &NewOrder) -> Result<Call, SdkError> {
        const ENDPOINT: &str = "place_order";
        let body = new_order
            .to_body()
            .map_err(|e| self.client.reject(ENDPOINT, e))?;

        Ok(Call::new(ENDPOINT, HttpMethod::Post, "/orders")
            .json(body)
            .status_checked()
            .tls(self.client.order_tls))
    }

    pub(crate) fn list_call(&self, params: &OrdersParams) -> Call {
        Call::get("list_orders", "/orders")
            .query(params.to_query())
            .status_checked()
            .tls(self.client.order_tls)
    }

    pub(crate) fn cancel_call(&self, client_id: &str, transaction_id: i64) -> Call {
        Call::new("cancel_order", HttpMethod::Delete, "/orders")
            .query(cancel_query(client_id, transaction_id))
    }
}

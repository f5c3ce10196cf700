//! Candles sub-client.

use crate::client::{Call, TradeApiClient};
use crate::domain::candles::{
    self, DayCandlesParams, DayCandlesResponse, IntradayCandlesParams, IntradayCandlesResponse,
};
use crate::error::SdkError;

/// Sub-client for price history.
pub struct Candles<'a> {
    pub(crate) client: &'a TradeApiClient,
}

impl<'a> Candles<'a> {
    /// Daily or weekly bars. `GET /day-candles`.
    pub async fn day(&self, params: &DayCandlesParams) -> Result<DayCandlesResponse, SdkError> {
        self.client.call(self.day_call(params), candles::parse_day).await
    }

    /// Minute and hourly bars. `GET /intraday-candles`.
    pub async fn intraday(
        &self,
        params: &IntradayCandlesParams,
    ) -> Result<IntradayCandlesResponse, SdkError> {
        let call = self.intraday_call(params);
        self.client.call(call, candles::parse_intraday).await
    }

    pub(crate) fn day_call(&self, params: &DayCandlesParams) -> Call {
        Call::get("day_candles", "/day-candles").query(params.to_query())
    }

    pub(crate) fn intraday_call(&self, params: &IntradayCandlesParams) -> Call {
        Call::get("intraday_candles", "/intraday-candles").query(params.to_query())
    }
}

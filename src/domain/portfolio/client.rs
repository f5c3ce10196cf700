//! Portfolio sub-client.

use crate::client::{Call, TradeApiClient};
use crate::domain::portfolio::{self, PortfolioParams, PortfolioResponse};
use crate::error::SdkError;

pub struct Portfolio<'a> {
    pub(crate) client: &'a TradeApiClient,
}

impl<'a> Portfolio<'a> {
    /// Account portfolio. `GET /portfolio`.
    pub async fn get(&self, params: &PortfolioParams) -> Result<PortfolioResponse, SdkError> {
        self.client.call(self.get_call(params), portfolio::parse_response).await
    }

    pub(crate) fn get_call(&self, params: &PortfolioParams) -> Call {
        Call::get("portfolio", "/portfolio").query(params.to_query())
    }
}

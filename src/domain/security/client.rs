//! Securities sub-client.

use crate::client::{Call, TradeApiClient};
use crate::domain::security::{self, SecuritiesResponse};
use crate::error::SdkError;

pub struct Securities<'a> {
    pub(crate) client: &'a TradeApiClient,
}

impl<'a> Securities<'a> {
    /// Instrument reference data for one board and code. `GET /securities`.
    pub async fn get(&self, board: &str, code: &str) -> Result<SecuritiesResponse, SdkError> {
        let call = self.get_call(board, code);
        self.client.call(call, security::parse_response).await
    }

    pub(crate) fn get_call(&self, board: &str, code: &str) -> Call {
        Call::get("securities", "/securities").query(security::securities_query(board, code))
    }
}

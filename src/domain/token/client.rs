//! Tokens sub-client.

use crate::client::{Call, TradeApiClient};
use crate::domain::token::{self, TokenValidationResponse};
use crate::error::SdkError;

/// Sub-client for access token checks.
pub struct Tokens<'a> {
    pub(crate) client: &'a TradeApiClient,
}

impl<'a> Tokens<'a> {
    /// Check the configured API token. `GET /access-tokens/check`.
    pub async fn check(&self) -> Result<TokenValidationResponse, SdkError> {
        self.client.call(self.check_call(), token::parse_response).await
    }

    pub(crate) fn check_call(&self) -> Call {
        Call::get("check_access_token", "/access-tokens/check")
    }
}

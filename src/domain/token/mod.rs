//! Token domain: access token validation.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SchemaError;
use crate::shared::{Envelope, WireEnvelope};

/// Identity of a valid access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenValidation {
    pub id: i64,
}

/// Token check result. The error half is passed through untyped.
pub type TokenValidationResponse = Envelope<TokenValidation, Value>;

/// Token check body as received.
pub type TokenValidationWire = WireEnvelope<TokenValidation, Value>;

impl TryFrom<TokenValidationWire> for TokenValidationResponse {
    type Error = SchemaError;

    fn try_from(wire: TokenValidationWire) -> Result<Self, Self::Error> {
        Envelope::try_from_wire(wire, Ok)
    }
}

pub(crate) fn parse_response(body: &str) -> Result<TokenValidationResponse, SchemaError> {
    crate::shared::parse::<TokenValidationWire, _>("TokenValidationResponse", body)
}

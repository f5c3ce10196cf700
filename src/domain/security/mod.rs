//! Securities domain. The `data` object is passed through untyped.

#[cfg(feature = "http")]
pub mod client;

use serde_json::Value;

use crate::error::SchemaError;
use crate::shared::schema::parse_wire;
use crate::shared::{Envelope, ErrorPayload, QueryParams, WireEnvelope};

pub type SecuritiesResponse = Envelope<Value, ErrorPayload>;

pub(crate) fn securities_query(board: &str, code: &str) -> QueryParams {
    vec![("Board", board.to_string()), ("Seccode", code.to_string())]
}

pub(crate) fn parse_response(body: &str) -> Result<SecuritiesResponse, SchemaError> {
    let wire: WireEnvelope<Value, ErrorPayload> = parse_wire("SecuritiesResponse", body)?;
    Envelope::try_from_wire(wire, Ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query() {
        assert_eq!(
            securities_query("TQBR", "GAZP"),
            vec![("Board", "TQBR".to_string()), ("Seccode", "GAZP".to_string())]
        );
    }

    #[test]
    fn test_parse_securities() {
        let body = r#"{"data":{"securities":[{"code":"GAZP","board":"TQBR","lotSize":10,"decimals":2}]}}"#;
        let resp = parse_response(body).unwrap();
        assert_eq!(resp.data().unwrap()["securities"][0]["lotSize"], 10);
    }

    #[test]
    fn test_not_json() {
        let err = parse_response("Service Unavailable").unwrap_err();
        assert_eq!(
            err,
            SchemaError::validation("SecuritiesResponse", "JSON document", "Service Unavailable")
        );
    }
}

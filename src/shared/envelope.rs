//! Response envelope shared by every endpoint: `{"data": ..., "error": ...}`.

use serde::{Deserialize, Serialize, Serializer};

use crate::error::SchemaError;

/// Raw envelope as it comes off the wire. Both halves are optional here;
/// the "at least one" rule is checked when converting into [`Envelope`].
#[derive(Deserialize, Debug, Clone)]
pub struct WireEnvelope<D, E> {
    pub data: Option<D>,
    pub error: Option<E>,
}

/// Validated envelope: at least one of `data` / `error` is present.
///
/// The upstream contract says exactly one is populated. A response carrying
/// both is kept as-is; a response carrying neither is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T, E> {
    halves: Halves<T, E>,
}

#[derive(Debug, Clone, PartialEq)]
enum Halves<T, E> {
    Data(T),
    Error(E),
    Both(T, E),
}

impl<T, E> Envelope<T, E> {
    pub fn from_parts(data: Option<T>, error: Option<E>) -> Result<Self, SchemaError> {
        let halves = match (data, error) {
            (Some(data), None) => Halves::Data(data),
            (None, Some(error)) => Halves::Error(error),
            (Some(data), Some(error)) => Halves::Both(data, error),
            (None, None) => {
                return Err(SchemaError::validation(
                    "data",
                    "either `data` or `error`",
                    "both null",
                ));
            }
        };
        Ok(Self { halves })
    }

    pub fn is_ok(&self) -> bool {
        !matches!(self.halves, Halves::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match &self.halves {
            Halves::Data(data) | Halves::Both(data, _) => Some(data),
            Halves::Error(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        self.into_result().ok()
    }

    pub fn error(&self) -> Option<&E> {
        match &self.halves {
            Halves::Error(error) | Halves::Both(_, error) => Some(error),
            Halves::Data(_) => None,
        }
    }

    /// `Ok(data)` when data is present (even if an error rode along), otherwise `Err(error)`.
    pub fn into_result(self) -> Result<T, E> {
        match self.halves {
            Halves::Data(data) | Halves::Both(data, _) => Ok(data),
            Halves::Error(error) => Err(error),
        }
    }

    /// Convert the wire data half, keeping the error half untouched.
    pub(crate) fn try_from_wire<D>(
        wire: WireEnvelope<D, E>,
        convert: impl FnOnce(D) -> Result<T, SchemaError>,
    ) -> Result<Self, SchemaError> {
        let data = wire.data.map(convert).transpose()?;
        Self::from_parts(data, wire.error)
    }
}

/// Serializes back to the `{"data": ..., "error": ...}` shape.
impl<T: Serialize, E: Serialize> Serialize for Envelope<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a, T, E> {
            data: Option<&'a T>,
            error: Option<&'a E>,
        }

        Repr {
            data: self.data(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}

/// Structured error object used by the candle, portfolio and securities endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub data: Option<String>,
}

impl std::fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_null_rejected() {
        let err = Envelope::<u32, String>::from_parts(None, None).unwrap_err();
        assert_eq!(err.field(), "data");
    }

    #[test]
    fn test_error_only() {
        let env = Envelope::<u32, String>::from_parts(None, Some("boom".into())).unwrap();
        assert!(!env.is_ok());
        assert_eq!(env.into_result(), Err("boom".to_string()));
    }

    #[test]
    fn test_both_present_tolerated() {
        let env = Envelope::from_parts(Some(7u32), Some("warning".to_string())).unwrap();
        assert!(env.is_ok());
        assert_eq!(env.error().map(String::as_str), Some("warning"));
        assert_eq!(env.into_result(), Ok(7));
    }

    #[test]
    fn test_wire_envelope_missing_keys() {
        let wire: WireEnvelope<u32, String> = serde_json::from_str("{}").unwrap();
        assert!(wire.data.is_none());
        assert!(wire.error.is_none());
    }

    /// Payload types without a `Default` impl, like the real wire structs.
    #[derive(Deserialize, Debug, PartialEq)]
    struct Quote {
        last: i64,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Fault {
        reason: String,
    }

    #[test]
    fn test_wire_envelope_payloads_without_default() {
        let wire: WireEnvelope<Quote, Fault> =
            serde_json::from_str(r#"{"data": {"last": 5}}"#).unwrap();
        assert_eq!(wire.data, Some(Quote { last: 5 }));
        assert!(wire.error.is_none());

        let wire: WireEnvelope<Quote, Fault> =
            serde_json::from_str(r#"{"data": null, "error": {"reason": "closed"}}"#).unwrap();
        assert!(wire.data.is_none());
        assert_eq!(wire.error.unwrap().reason, "closed");

        let wire: WireEnvelope<Quote, Fault> = serde_json::from_str("{}").unwrap();
        assert!(wire.data.is_none() && wire.error.is_none());
    }

    #[test]
    fn test_data_only() {
        let env = Envelope::<u32, String>::from_parts(Some(3), None).unwrap();
        assert!(env.is_ok());
        assert_eq!(env.data(), Some(&3));
        assert!(env.error().is_none());
        assert_eq!(env.into_data(), Some(3));
    }

    #[test]
    fn test_serialize_keeps_both_keys() {
        let env = Envelope::<u32, String>::from_parts(None, Some("boom".into())).unwrap();
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json, serde_json::json!({"data": null, "error": "boom"}));

        let env = Envelope::from_parts(Some(1u32), Some("late".to_string())).unwrap();
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json, serde_json::json!({"data": 1, "error": "late"}));
    }

    #[test]
    fn test_error_payload_deserialize() {
        let json = r#"{"code": "NotFound", "message": "Security not found", "data": null}"#;
        let payload: ErrorPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.code, "NotFound");
        assert!(payload.data.is_none());
        assert_eq!(payload.to_string(), "NotFound: Security not found");
    }
}

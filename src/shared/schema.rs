//! Body → wire struct → domain model, with structured schema errors.
//!
//! Serde does the shape checking on the wire structs; the domain conversions
//! (`convert.rs` in each domain slice) do the closed-set and range checks with
//! full field paths. Both report through [`SchemaError`].

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::error::SchemaError;
use crate::shared::scaling::ScaledNumber;
use crate::shared::serde_util;

/// Longest body excerpt carried in errors and logs.
pub const EXCERPT_LEN: usize = 256;

/// Parse a response body into domain type `T` via wire type `W`.
///
/// `model` names the response for error reporting when serde cannot point at a field.
pub fn parse<W, T>(model: &str, body: &str) -> Result<T, SchemaError>
where
    W: DeserializeOwned,
    T: TryFrom<W, Error = SchemaError>,
{
    T::try_from(parse_wire::<W>(model, body)?)
}

/// Parse a response body into its wire type only.
///
/// Serde errors keep the path of the offending value (`data.candles[0].volume`).
pub fn parse_wire<W: DeserializeOwned>(model: &str, body: &str) -> Result<W, SchemaError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|_| SchemaError::validation(model, "JSON document", excerpt(body)))?;
    serde_path_to_error::deserialize(value).map_err(|e| from_serde(model, &e))
}

/// Truncate a payload for diagnostics without splitting a UTF-8 character.
pub fn excerpt(body: &str) -> String {
    if body.len() <= EXCERPT_LEN {
        return body.to_string();
    }
    let mut end = EXCERPT_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}

/// Translate a path-tracked serde error into a [`SchemaError`].
///
/// For a missing field the path stops at the enclosing object, so the field
/// name is appended. An empty path means the document root.
pub(crate) fn from_serde(
    model: &str,
    err: &serde_path_to_error::Error<serde_json::Error>,
) -> SchemaError {
    let path = match err.path().to_string() {
        root if root == "." => None,
        path => Some(path),
    };
    let message = err.inner().to_string();

    if let Some(rest) = message.strip_prefix("missing field `") {
        let leaf = rest.split('`').next().unwrap_or(rest);
        let field = match path {
            Some(parent) => format!("{parent}.{leaf}"),
            None => leaf.to_string(),
        };
        return SchemaError::validation(field, "required field", "missing");
    }

    let field = path.unwrap_or_else(|| model.to_string());
    let mismatch = message
        .strip_prefix("invalid type: ")
        .or_else(|| message.strip_prefix("invalid value: "))
        .or_else(|| message.strip_prefix("invalid length "));
    if let Some((received, expected)) = mismatch.and_then(|rest| rest.split_once(", expected ")) {
        return SchemaError::validation(field, expected, received);
    }

    SchemaError::validation(field, "valid response", message)
}

// ─── Conversion helpers used by the domain slices ───────────────────────────

/// Parse a closed-set string field.
pub(crate) fn parse_enum<T: FromStr>(
    field: impl Into<String>,
    raw: String,
) -> Result<T, SchemaError> {
    T::from_str(&raw).map_err(|_| SchemaError::UnknownEnumValue {
        field: field.into(),
        value: raw,
    })
}

pub(crate) fn parse_timestamp(
    field: impl Into<String>,
    raw: &str,
) -> Result<DateTime<Utc>, SchemaError> {
    serde_util::parse_timestamp(raw)
        .ok_or_else(|| SchemaError::validation(field, "ISO-8601 timestamp", raw))
}

pub(crate) fn parse_optional_timestamp(
    field: impl Into<String>,
    raw: Option<String>,
) -> Result<Option<DateTime<Utc>>, SchemaError> {
    raw.map(|s| parse_timestamp(field, &s)).transpose()
}

pub(crate) fn decode_scaled(
    field: impl Into<String>,
    value: ScaledNumber,
) -> Result<Decimal, SchemaError> {
    value.decode().map_err(|source| SchemaError::InvalidScale {
        field: field.into(),
        source,
    })
}

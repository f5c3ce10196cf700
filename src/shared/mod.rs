//! Shared types and utilities used across all domain modules.
//!
//! Wire-level pieces that are not specific to one endpoint family live here:
//! the scaled-number codec, the response envelope, timestamp helpers and the
//! body → model parse layer.

pub mod envelope;
pub mod scaling;
pub mod schema;
pub mod serde_util;

pub use envelope::{Envelope, ErrorPayload, WireEnvelope};
pub use scaling::{decode, ScaledNumber, ScalingError};
pub use schema::parse;

// ─── Query helpers ───────────────────────────────────────────────────────────

/// Ordered query-string pairs for a single request.
pub type QueryParams = Vec<(&'static str, String)>;

/// Booleans go into query strings lower-cased (`true` / `false`).
pub fn flag(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

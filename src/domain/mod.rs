//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: domain types returned to callers
//! - `wire.rs`: raw serde structs matching the backend responses
//! - `convert.rs`: `TryFrom` conversions with closed-set and range checks
//! - `client.rs`: sub-client with one method per endpoint
//!
//! Portfolio and securities keep their `data` untyped and have no wire layer.

pub mod candles;
pub mod order;
pub mod portfolio;
pub mod security;
pub mod token;

//! Network URL constants for the Trade API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://trade-api.finam.ru/public/api/v1";

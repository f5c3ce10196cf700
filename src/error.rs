//! Unified SDK error types.

use thiserror::Error;

use crate::shared::ScalingError;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("API request failed with status {status}: {body}")]
    ApiRequest { status: u16, body: String },

    #[error("Schema validation error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SdkError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::ApiRequest { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Network-level failure: connection refused, TLS handshake, timeout, body read.
#[derive(Error, Debug)]
#[error("{cause}")]
pub struct TransportError {
    #[cfg(feature = "http")]
    #[source]
    cause: reqwest::Error,
    #[cfg(not(feature = "http"))]
    cause: String,
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for TransportError {
    fn from(cause: reqwest::Error) -> Self {
        Self { cause }
    }
}

#[cfg(feature = "http")]
impl TransportError {
    pub fn is_timeout(&self) -> bool {
        self.cause.is_timeout()
    }

    pub fn is_connect(&self) -> bool {
        self.cause.is_connect()
    }

    pub fn cause(&self) -> &reqwest::Error {
        &self.cause
    }
}

/// The response body did not match the expected model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("field `{field}`: expected {expected}, received {received}")]
    Validation {
        field: String,
        expected: String,
        received: String,
    },

    #[error("field `{field}`: unknown enum value `{value}`")]
    UnknownEnumValue { field: String, value: String },

    #[error("field `{field}`: {source}")]
    InvalidScale {
        field: String,
        #[source]
        source: ScalingError,
    },
}

impl SchemaError {
    pub fn validation(
        field: impl Into<String>,
        expected: impl Into<String>,
        received: impl Into<String>,
    ) -> Self {
        SchemaError::Validation {
            field: field.into(),
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Path of the offending field.
    pub fn field(&self) -> &str {
        match self {
            SchemaError::Validation { field, .. }
            | SchemaError::UnknownEnumValue { field, .. }
            | SchemaError::InvalidScale { field, .. } => field,
        }
    }
}

/// Configuration errors (environment, headers).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Failed to load .env file: {0}")]
    DotEnv(String),

    #[error("Invalid header value for '{name}'")]
    InvalidHeader { name: &'static str },

    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}

/// Result type alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

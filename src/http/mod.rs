//! HTTP transport layer: single-shot `HttpTransport`.

pub mod client;

pub use client::{
    default_headers, HttpMethod, HttpRequest, HttpTransport, RawResponse, TlsVerification,
    API_KEY_HEADER,
};

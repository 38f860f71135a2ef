//! HTTP client for the upstream checkout.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types do not pull in `reqwest`.

mod checkout;

pub use checkout::CheckoutClient;

use reqwest::StatusCode;

/// Errors produced by the upstream HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection refused, timeout, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The checkout returned a non-2xx status code.
    #[error("api error: status {status}, body: {body}")]
    Api { status: StatusCode, body: String },

    /// Response body is not the declared schema.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

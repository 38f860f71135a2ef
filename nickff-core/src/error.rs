//! Failure taxonomy of a lookup.
//!
//! Every variant is terminal for the request that produced it.

use nickff_sdk::client::ClientError;
use thiserror::Error;

/// Why the checkout response holds no usable account data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// `confirmationFields` is absent or empty, or the body is not the
    /// expected document at all.
    NoData,
    /// `confirmationFields.roles` is absent or empty.
    NoRoles,
}

impl std::fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFoundReason::NoData => f.write_str("no data in response"),
            NotFoundReason::NoRoles => f.write_str("user has no roles"),
        }
    }
}

/// Errors that can occur while looking up an account.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The identifier is missing or empty.
    #[error("userId parameter is required")]
    InvalidArgument,

    /// The checkout answered but has nothing for this account.
    #[error("{0}")]
    NotFound(NotFoundReason),

    /// The checkout could not be reached.
    #[error("upstream request failed: {0}")]
    UpstreamUnavailable(String),

    /// The checkout returned a non-2xx status.
    #[error("upstream HTTP error: {body}")]
    UpstreamError { status: u16, body: String },
}

impl From<ClientError> for LookupError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => LookupError::UpstreamUnavailable(describe(&e)),
            ClientError::Api { status, body } => LookupError::UpstreamError {
                status: status.as_u16(),
                body,
            },
            ClientError::Json(_) => LookupError::NotFound(NotFoundReason::NoData),
        }
    }
}

/// Render an error with its whole source chain, e.g.
/// `error sending request for url (...): operation timed out`.
fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

//! Lookup API request and response types.

use serde::{Deserialize, Serialize};

/// Query string of `GET /nickff`.
///
/// `user_id` is optional at the wire level so that a missing parameter
/// reaches the handler and is reported with the same error as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupQuery {
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

/// Normalized account data extracted from the checkout response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookupResult {
    /// In-game nickname, carried by the first role of the account.
    pub username: String,
    /// The identifier that was looked up, echoed back verbatim.
    #[serde(rename = "userId")]
    pub user_id: String,
    pub country: String,
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

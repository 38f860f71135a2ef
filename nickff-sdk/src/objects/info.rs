//! Static service description served at the root path.

use serde::{Deserialize, Serialize};

/// Welcome document returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub instructions: UsageInstructions,
    pub version: String,
}

/// How to call the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageInstructions {
    pub lookup_endpoint: String,
    pub example: String,
    pub author: String,
}

impl ServiceInfo {
    pub const AUTHOR: &'static str = "VipCoringa";

    /// Build the welcome document for a server running `version`.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            message: "Welcome to the VipCoringaX Free Fire nickname API".to_string(),
            instructions: UsageInstructions {
                lookup_endpoint: "/nickff?userId=YOUR_USER_ID".to_string(),
                example: "/nickff?userId=123456789".to_string(),
                author: Self::AUTHOR.to_string(),
            },
            version: version.into(),
        }
    }
}

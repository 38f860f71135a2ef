//! TOML file configuration structures.
//!
//! These structs directly map to the `nickff.toml` file format. Every field
//! is optional; an absent file or section means the storefront defaults.

use nickff_sdk::config::{
    DEFAULT_ENDPOINT, DEFAULT_SHOP_LANG, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    DEFAULT_VOUCHER_PRICE_POINT_ID, DEFAULT_VOUCHER_TYPE_NAME,
};
use serde::Deserialize;
use std::net::SocketAddr;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Server configuration section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    "0.0.0.0:8080".parse().expect("valid default address")
}

/// Upstream checkout section.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Payment initialisation URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_voucher_price_point_id")]
    pub voucher_price_point_id: u64,
    #[serde(default = "default_voucher_type_name")]
    pub voucher_type_name: String,
    #[serde(default = "default_shop_lang")]
    pub shop_lang: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            voucher_price_point_id: default_voucher_price_point_id(),
            voucher_type_name: default_voucher_type_name(),
            shop_lang: default_shop_lang(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_voucher_price_point_id() -> u64 {
    DEFAULT_VOUCHER_PRICE_POINT_ID
}

fn default_voucher_type_name() -> String {
    DEFAULT_VOUCHER_TYPE_NAME.to_string()
}

fn default_shop_lang() -> String {
    DEFAULT_SHOP_LANG.to_string()
}

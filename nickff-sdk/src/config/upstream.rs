//! Upstream checkout configuration.
//!
//! Everything specific to the regional storefront and product lives here,
//! so a contract change on the checkout side is a config change only.

use std::time::Duration;
use url::Url;

/// The Indonesian storefront payment initialisation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://order.codashop.com/id/initPayment.action";

/// Desktop browser identification expected by the checkout form.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Price point of the cheapest Free Fire diamond voucher.
pub const DEFAULT_VOUCHER_PRICE_POINT_ID: u64 = 8050;

pub const DEFAULT_VOUCHER_TYPE_NAME: &str = "FREEFIRE";

pub const DEFAULT_SHOP_LANG: &str = "in_ID";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration of the upstream checkout call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Full URL of the payment initialisation action.
    pub endpoint: Url,
    /// Value sent as the `User-Agent` header.
    pub user_agent: String,
    /// Total request timeout, connect included.
    pub timeout: Duration,
    pub voucher_price_point_id: u64,
    pub voucher_type_name: String,
    pub shop_lang: String,
}

impl UpstreamConfig {
    /// Create a config pointing at `endpoint` with every other field defaulted.
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("valid default endpoint"),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            voucher_price_point_id: DEFAULT_VOUCHER_PRICE_POINT_ID,
            voucher_type_name: DEFAULT_VOUCHER_TYPE_NAME.to_owned(),
            shop_lang: DEFAULT_SHOP_LANG.to_owned(),
        }
    }
}

//! Configuration types for the lookup relay.
//!
//! These types represent the validated runtime configuration used by the server
//! and can be shared across crates. The actual config loading/parsing is handled
//! by the server crate.

mod server;
mod upstream;

pub use server::ServerConfig;
pub use upstream::{
    DEFAULT_ENDPOINT, DEFAULT_SHOP_LANG, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    DEFAULT_VOUCHER_PRICE_POINT_ID, DEFAULT_VOUCHER_TYPE_NAME, UpstreamConfig,
};

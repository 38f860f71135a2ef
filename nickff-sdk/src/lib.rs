//! Shared types for the nickname lookup relay.
//!
//! - [`objects`]: the served API objects and the upstream checkout schema.
//! - [`config`]: runtime configuration shared between crates.
//! - [`client`]: the typed upstream HTTP client (`client` feature).

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;

//! Application state shared across all request handlers.

use nickff_sdk::client::CheckoutClient;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// Checkout client (rebuilt on SIGHUP reload).
    pub checkout: Arc<RwLock<CheckoutClient>>,
}

impl AppState {
    /// Create a new AppState around the given checkout client.
    pub fn new(checkout: CheckoutClient) -> Self {
        Self {
            checkout: Arc::new(RwLock::new(checkout)),
        }
    }

    /// Get a handle to the current checkout client.
    ///
    /// The lock is released before returning, so a reload never waits on an
    /// in-flight lookup.
    pub async fn checkout(&self) -> CheckoutClient {
        self.checkout.read().await.clone()
    }

    /// Swap in a new checkout client (used during SIGHUP reload).
    pub async fn update_checkout(&self, client: CheckoutClient) {
        let mut checkout = self.checkout.write().await;
        *checkout = client;
    }
}

//! Checkout client (relay → `initPayment.action`).

use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};

use super::ClientError;
use crate::config::UpstreamConfig;
use crate::objects::upstream::{InitPaymentRequest, InitPaymentResponse};

/// Content type the checkout form posts with.
pub const FORM_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Typed HTTP client for the checkout payment initialisation action.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its
/// connection pool between clones.
#[derive(Debug, Clone)]
pub struct CheckoutClient {
    http: Client,
    config: UpstreamConfig,
}

impl CheckoutClient {
    /// Create a new `CheckoutClient` whose requests time out after
    /// `config.timeout`.
    ///
    /// Redirects are not followed: a 3xx is reported as the checkout's own
    /// status and never causes a second request.
    pub fn new(config: UpstreamConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, config })
    }

    /// `POST {endpoint}` – initialise a payment for `user_id` and return the
    /// parsed confirmation document.
    ///
    /// Exactly one request is sent; nothing is retried.
    #[tracing::instrument(skip_all, err, name = "Upstream:InitPayment")]
    pub async fn init_payment(&self, user_id: &str) -> Result<InitPaymentResponse, ClientError> {
        let form = InitPaymentRequest::new(&self.config, user_id);

        let resp = self
            .http
            .post(self.config.endpoint.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(USER_AGENT, &self.config.user_agent)
            .json(&form)
            .send()
            .await?;

        parse_response(resp).await
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        // A body that cannot be read is a transport failure, not an empty detail.
        let body = resp.text().await?;
        return Err(ClientError::Api { status, body });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}

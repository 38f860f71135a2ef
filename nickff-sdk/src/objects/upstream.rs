//! Declared schema of the checkout `initPayment.action` exchange.
//!
//! Only the fields the relay reads are typed. Everything in the response is
//! optional because the checkout omits sections it has no data for, and a
//! `null` is treated the same as a missing key.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::UpstreamConfig;

/// Payment initialisation form, posted as JSON.
///
/// The empty fields are unused parts of the checkout form that must still be
/// present for the call to be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitPaymentRequest<'a> {
    #[serde(rename = "voucherPricePoint.id")]
    pub voucher_price_point_id: u64,
    #[serde(rename = "voucherPricePoint.price")]
    pub voucher_price_point_price: &'a str,
    #[serde(rename = "voucherPricePoint.variablePrice")]
    pub voucher_price_point_variable_price: &'a str,
    pub n: &'a str,
    pub email: &'a str,
    #[serde(rename = "userVariablePrice")]
    pub user_variable_price: &'a str,
    #[serde(rename = "order.data.profile")]
    pub order_data_profile: &'a str,
    #[serde(rename = "user.userId")]
    pub user_id: &'a str,
    #[serde(rename = "voucherTypeName")]
    pub voucher_type_name: &'a str,
    #[serde(rename = "affiliateTrackingId")]
    pub affiliate_tracking_id: &'a str,
    #[serde(rename = "impactClickId")]
    pub impact_click_id: &'a str,
    #[serde(rename = "checkoutId")]
    pub checkout_id: &'a str,
    #[serde(rename = "tmwAccessToken")]
    pub tmw_access_token: &'a str,
    #[serde(rename = "shopLang")]
    pub shop_lang: &'a str,
}

impl<'a> InitPaymentRequest<'a> {
    /// Build the form for `user_id` with the product and locale from `config`.
    pub fn new(config: &'a UpstreamConfig, user_id: &'a str) -> Self {
        Self {
            voucher_price_point_id: config.voucher_price_point_id,
            voucher_price_point_price: "",
            voucher_price_point_variable_price: "",
            n: "",
            email: "",
            user_variable_price: "",
            order_data_profile: "",
            user_id,
            voucher_type_name: &config.voucher_type_name,
            affiliate_tracking_id: "",
            impact_click_id: "",
            checkout_id: "",
            tmw_access_token: "",
            shop_lang: &config.shop_lang,
        }
    }
}

/// Successful `initPayment.action` response body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InitPaymentResponse {
    #[serde(rename = "confirmationFields", default)]
    pub confirmation_fields: Option<ConfirmationFields>,
}

/// Identity section of the response for the queried account.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfirmationFields {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<Role>>,
    /// Keys the relay does not read. Kept only to tell `{}` apart from a
    /// section that carries other data.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl ConfirmationFields {
    /// `true` for a section with no keys at all.
    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.roles.is_none() && self.other.is_empty()
    }
}

/// One game role of the account; `role` carries the display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub role: Option<String>,
}

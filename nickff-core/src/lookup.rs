//! The lookup adapter.
//!
//! validate → build form → one checkout call → parse → extract.

use kanau::processor::Processor;
use nickff_sdk::client::CheckoutClient;
use nickff_sdk::objects::LookupResult;
use nickff_sdk::objects::upstream::InitPaymentResponse;

use crate::error::{LookupError, NotFoundReason};

/// Placeholder for a field the checkout left out.
pub const UNKNOWN: &str = "Unknown";

/// A validated account identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    user_id: String,
}

impl LookupRequest {
    /// Validate a raw identifier. The value is kept verbatim, whitespace included.
    pub fn new(user_id: Option<String>) -> Result<Self, LookupError> {
        match user_id {
            Some(user_id) if !user_id.is_empty() => Ok(Self { user_id }),
            _ => Err(LookupError::InvalidArgument),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// Looks accounts up through the checkout.
///
/// Holds no state besides the injected client; build one per request from
/// the shared client.
pub struct LookupProcessor {
    pub client: CheckoutClient,
}

impl Processor<LookupRequest> for LookupProcessor {
    type Output = LookupResult;
    type Error = LookupError;
    async fn process(&self, request: LookupRequest) -> Result<LookupResult, LookupError> {
        let response = self.client.init_payment(request.user_id()).await?;
        extract_result(request.user_id, response)
    }
}

/// Map the checkout document onto a [`LookupResult`].
///
/// The first role names the account; later roles are ignored.
pub fn extract_result(
    user_id: String,
    response: InitPaymentResponse,
) -> Result<LookupResult, LookupError> {
    let fields = response
        .confirmation_fields
        .filter(|fields| !fields.is_empty())
        .ok_or(LookupError::NotFound(NotFoundReason::NoData))?;

    let first_role = fields
        .roles
        .and_then(|roles| roles.into_iter().next())
        .ok_or(LookupError::NotFound(NotFoundReason::NoRoles))?;

    Ok(LookupResult {
        username: first_role.role.unwrap_or_else(|| UNKNOWN.to_string()),
        user_id,
        country: fields.country.unwrap_or_else(|| UNKNOWN.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> InitPaymentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_validation() {
        assert!(matches!(
            LookupRequest::new(None),
            Err(LookupError::InvalidArgument)
        ));
        assert!(matches!(
            LookupRequest::new(Some(String::new())),
            Err(LookupError::InvalidArgument)
        ));
        let request = LookupRequest::new(Some(" 42 ".to_string())).unwrap();
        assert_eq!(request.user_id(), " 42 ");
    }

    #[test]
    fn test_extract_first_role() {
        let response = parse(json!({
            "confirmationFields": {
                "country": "Indonesia",
                "roles": [{"role": "ProGamer123"}, {"role": "SecondRole"}]
            }
        }));
        let result = extract_result("123456789".to_string(), response).unwrap();
        assert_eq!(
            result,
            LookupResult {
                username: "ProGamer123".to_string(),
                user_id: "123456789".to_string(),
                country: "Indonesia".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_fields_default_to_unknown() {
        let response = parse(json!({"confirmationFields": {"roles": [{}]}}));
        let result = extract_result("1".to_string(), response).unwrap();
        assert_eq!(result.username, UNKNOWN);
        assert_eq!(result.country, UNKNOWN);
        assert_eq!(result.user_id, "1");
    }

    #[test]
    fn test_no_confirmation_fields() {
        for body in [
            json!({}),
            json!({"confirmationFields": null}),
            json!({"confirmationFields": {}}),
            json!({"errorMsg": "x", "roles": [{"role": "top-level"}]}),
        ] {
            let err = extract_result("1".to_string(), parse(body)).unwrap_err();
            assert!(matches!(err, LookupError::NotFound(NotFoundReason::NoData)));
        }
    }

    #[test]
    fn test_no_roles() {
        for body in [
            json!({"confirmationFields": {"country": "Indonesia"}}),
            json!({"confirmationFields": {"country": "Indonesia", "roles": []}}),
            json!({"confirmationFields": {"country": "Indonesia", "roles": null}}),
        ] {
            let err = extract_result("1".to_string(), parse(body)).unwrap_err();
            assert!(matches!(err, LookupError::NotFound(NotFoundReason::NoRoles)));
        }
    }
}

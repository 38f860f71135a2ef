//! Public lookup API.
//!
//! # Endpoints
//!
//! - `GET /`                     – usage information
//! - `GET /nickff?userId={id}`   – nickname and country of a Free Fire account

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use nickff_core::LookupError;
use nickff_sdk::objects::ErrorDetail;

use crate::state::AppState;

mod info;
mod lookup;

/// Build the lookup API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(info::service_info))
        .route("/nickff", get(lookup::lookup_nickname))
}

// ---------------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------------

/// A failed lookup, rendered as an [`ErrorDetail`] body.
#[derive(Debug)]
pub(crate) struct ApiError(LookupError);

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            LookupError::InvalidArgument => StatusCode::BAD_REQUEST,
            LookupError::NotFound(_) => StatusCode::NOT_FOUND,
            LookupError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            LookupError::UpstreamError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self.0 {
            LookupError::UpstreamUnavailable(e) => {
                tracing::warn!(error = %e, "Checkout unreachable");
            }
            LookupError::UpstreamError { status, .. } => {
                tracing::warn!(status, "Checkout returned an error status");
            }
            LookupError::InvalidArgument | LookupError::NotFound(_) => {}
        }
        (status, Json(ErrorDetail::new(self.0.to_string()))).into_response()
    }
}

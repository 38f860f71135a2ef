use axum::{Json, response::IntoResponse};
use nickff_sdk::objects::ServiceInfo;

/// `GET /` — how to use the API.
pub(super) async fn service_info() -> impl IntoResponse {
    Json(ServiceInfo::new(env!("CARGO_PKG_VERSION")))
}

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use kanau::processor::Processor;
use nickff_core::{LookupProcessor, LookupRequest};
use nickff_sdk::objects::LookupQuery;

use super::ApiError;
use crate::state::AppState;

/// `GET /nickff?userId={id}` — look up a Free Fire account.
///
/// The identifier is validated before the checkout is contacted, so a
/// missing or empty `userId` never causes an outbound call.
pub(super) async fn lookup_nickname(
    state: State<AppState>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = query.ok().and_then(|Query(q)| q.user_id);
    let request = LookupRequest::new(user_id)?;

    let processor = LookupProcessor {
        client: state.checkout().await,
    };

    let result = processor.process(request).await?;

    Ok(Json(result))
}

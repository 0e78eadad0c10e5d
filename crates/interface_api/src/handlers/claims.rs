//! Claims handlers

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::dto::claims::ClaimInfoRequest;
use crate::{error::ApiError, AppState};

/// Validation message for a missing or empty claim id, fixed by the endpoint
/// contract (consumed by a Russian-language frontend).
pub const CLAIM_ID_REQUIRED: &str = "claimId обязателен";

/// Looks up a delivery claim with the external dispatch provider.
///
/// The body is parsed permissively: malformed or absent JSON never fails the
/// request by itself, it just leaves `claimId` empty and takes the 400 path.
/// On success the provider's payload is returned verbatim.
pub async fn claim_info(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let request = ClaimInfoRequest::from_bytes(&body);

    let claim = request
        .claim_ref()
        .ok_or_else(|| ApiError::BadRequest(CLAIM_ID_REQUIRED.to_string()))?;

    match state.dispatch.claim_info(&claim).await {
        Ok(info) => Ok(Json(info.into_value())),
        Err(err) => {
            tracing::error!(claim = %claim, error = %err, "claim info lookup failed");
            Err(err.into())
        }
    }
}

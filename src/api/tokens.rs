//! Token issuance and verification endpoints

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use super::middleware::RequireClientToken;
use super::state::AppState;
use super::types::{
    ApiError, IssueTokenRequest, IssueTokenResponse, JsonBody, VerifyTokenResponse,
};
use crate::domain::TOKEN_LIFETIME_DAYS;

/// POST /tokens - issue a token for the server's client
pub async fn issue_token(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<IssueTokenRequest>,
) -> Result<(StatusCode, Json<IssueTokenResponse>), ApiError> {
    let token = state
        .codec
        .encode(&state.client, request.subject.as_deref())?;

    info!(
        client_id = %state.client.id(),
        has_subject = request.subject.is_some(),
        "Token issued"
    );

    Ok((
        StatusCode::CREATED,
        Json(IssueTokenResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: TOKEN_LIFETIME_DAYS * 24 * 60 * 60,
        }),
    ))
}

/// GET /tokens/verify - echo the claims of the presented bearer token
pub async fn verify_token(
    RequireClientToken(claims): RequireClientToken,
) -> Json<VerifyTokenResponse> {
    Json(VerifyTokenResponse {
        valid: true,
        claims,
    })
}

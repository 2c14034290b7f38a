//! Client token authentication extractor

use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::ClaimSet;
use crate::infrastructure::auth::bearer_token;

/// Extractor that requires a valid client token
///
/// Reads `Authorization: Bearer <token>` and validates the token against
/// the server's client identity.
#[derive(Debug, Clone)]
pub struct RequireClientToken(pub ClaimSet);

impl FromRequestParts<AppState> for RequireClientToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            bearer_token(&parts.headers).map_err(|e| ApiError::unauthorized(e.to_string()))?;

        debug!(
            token_prefix = %token.chars().take(8).collect::<String>(),
            "Validating client token"
        );

        let claims = state
            .codec
            .decode(&state.client, token)
            .map_err(|_| ApiError::unauthorized("Invalid or expired token"))?;

        Ok(RequireClientToken(claims))
    }
}

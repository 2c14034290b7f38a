//! Token endpoint payloads

use serde::{Deserialize, Serialize};

use crate::domain::ClaimSet;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IssueTokenRequest {
    /// End-user the token is issued on behalf of
    #[serde(default)]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IssueTokenResponse {
    pub token: String,
    pub token_type: String,
    /// Seconds until expiry
    pub expires_in: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    pub claims: ClaimSet,
}

//! HS256 client token encoding and validation

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::{ClaimSet, ClientIdentity, DomainError};

/// Claims `jsonwebtoken` checks for; it has no notion of a required `iat`
const REQUIRED_CLAIMS: [&str; 3] = ["exp", "nbf", "aud"];

/// Why a token was turned away. Kept private: callers only learn that it was.
#[derive(Debug, Error)]
enum Rejection {
    #[error("malformed token")]
    Malformed,

    #[error("signature mismatch")]
    Signature,

    #[error("algorithm not allowed")]
    Algorithm,

    #[error("audience mismatch")]
    Audience,

    #[error("missing required claim '{0}'")]
    MissingClaim(String),

    #[error("token expired")]
    Expired,

    #[error("token not yet valid")]
    NotYetValid,
}

impl From<jsonwebtoken::errors::Error> for Rejection {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.into_kind() {
            ErrorKind::InvalidSignature => Self::Signature,
            ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::MissingAlgorithm => Self::Algorithm,
            ErrorKind::InvalidAudience => Self::Audience,
            ErrorKind::MissingRequiredClaim(claim) => Self::MissingClaim(claim),
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::ImmatureSignature => Self::NotYetValid,
            _ => Self::Malformed,
        }
    }
}

/// The single failure outcome of [`TokenCodec::decode`]
#[derive(Debug, Error)]
#[error("Invalid token: {cause}")]
pub struct InvalidToken {
    cause: Rejection,
}

/// Issues and validates client tokens.
///
/// Tokens are compact JWS strings signed with HMAC-SHA-256 under the
/// client's secret. Validation follows one fixed policy: HS256 only, zero
/// leeway, and `exp`, `iat`, `nbf` and `aud` all required, with `aud`
/// equal to the client ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenCodec;

impl TokenCodec {
    pub fn new() -> Self {
        Self
    }

    /// Issue a token for `client`, optionally bound to an end-user subject
    pub fn encode(
        &self,
        client: &ClientIdentity,
        subject: Option<&str>,
    ) -> Result<String, DomainError> {
        self.encode_at(client, subject, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`
    pub fn encode_at(
        &self,
        client: &ClientIdentity,
        subject: Option<&str>,
        issued_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = ClaimSet::issue(client, subject, issued_at)?;
        let key = EncodingKey::from_secret(client.secret().as_bytes());

        let token = encode(&Header::new(Algorithm::HS256), &claims, &key)
            .map_err(|e| DomainError::internal(format!("Failed to sign token: {}", e)))?;

        debug!(
            client_id = %client.id(),
            has_subject = claims.sub.is_some(),
            exp = claims.exp,
            "Issued client token"
        );

        Ok(token)
    }

    /// Validate `token` for `client` and return its claims
    pub fn decode(&self, client: &ClientIdentity, token: &str) -> Result<ClaimSet, InvalidToken> {
        self.decode_at(client, token, Utc::now())
    }

    /// Validate `token` for `client`, judging time claims against `now`
    pub fn decode_at(
        &self,
        client: &ClientIdentity,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<ClaimSet, InvalidToken> {
        verify(client, token, now).map_err(|cause| {
            debug!(client_id = %client.id(), reason = %cause, "Rejected client token");
            InvalidToken { cause }
        })
    }
}

/// Payload as it arrives on the wire. Every registered claim is optional
/// here so that absence reaches the required-claim check instead of
/// failing deserialization.
#[derive(Debug, Deserialize)]
struct RawClaims {
    exp: Option<i64>,
    iat: Option<i64>,
    nbf: Option<i64>,
    aud: Option<String>,
    sub: Option<String>,
}

impl RawClaims {
    fn into_claims(self) -> Result<ClaimSet, Rejection> {
        Ok(ClaimSet {
            exp: self.exp.ok_or_else(|| missing("exp"))?,
            iat: self.iat.ok_or_else(|| missing("iat"))?,
            nbf: self.nbf.ok_or_else(|| missing("nbf"))?,
            aud: self.aud.ok_or_else(|| missing("aud"))?,
            sub: self.sub,
        })
    }
}

fn missing(claim: &str) -> Rejection {
    Rejection::MissingClaim(claim.to_string())
}

fn verify(client: &ClientIdentity, token: &str, now: DateTime<Utc>) -> Result<ClaimSet, Rejection> {
    let key = DecodingKey::from_secret(client.secret().as_bytes());
    let claims = decode::<RawClaims>(token, &key, &validation(client))?
        .claims
        .into_claims()?;

    if claims.is_expired_at(now) {
        return Err(Rejection::Expired);
    }

    if !claims.is_active_at(now) {
        return Err(Rejection::NotYetValid);
    }

    Ok(claims)
}

/// Signature, algorithm, audience and presence of `exp`, `nbf` and `aud`
/// are checked by `jsonwebtoken`; `iat` presence and the time window are
/// checked in [`verify`] against an explicit instant, with `exp` itself
/// already counting as expired.
fn validation(client: &ClientIdentity) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.set_required_spec_claims(&REQUIRED_CLAIMS);
    validation.set_audience(&[client.audience()]);
    validation
}

//! Token claim set

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::client::ClientIdentity;
use crate::domain::error::DomainError;

/// Lifetime of every issued token
pub const TOKEN_LIFETIME_DAYS: i64 = 30;

/// Registered claims carried by a client token.
///
/// Times are Unix epoch seconds. `sub` is left out of the payload entirely
/// when no subject was supplied, so its absence survives a decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
    /// Not-before timestamp, equal to `iat` for issued tokens
    pub nbf: i64,
    /// Audience (client ID)
    pub aud: String,
    /// Subject (optional end-user ID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl ClaimSet {
    /// Build the claims for a token issued to `client` at `issued_at`
    pub fn issue(
        client: &ClientIdentity,
        subject: Option<&str>,
        issued_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let iat = issued_at.timestamp();
        let exp = issued_at
            .checked_add_signed(Duration::days(TOKEN_LIFETIME_DAYS))
            .ok_or_else(|| DomainError::internal("Token expiry is out of range"))?
            .timestamp();

        Ok(Self {
            exp,
            iat,
            nbf: iat,
            aud: client.audience().to_string(),
            sub: subject.map(str::to_string),
        })
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }

    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.nbf, 0).single()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// A token stops being valid at the instant it expires
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.nbf
    }

    pub fn audience(&self) -> &str {
        &self.aud
    }

    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::ClientId;

    fn client() -> ClientIdentity {
        ClientIdentity::new(ClientId::from(1), "secret").unwrap()
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_issue_sets_window() {
        let claims = ClaimSet::issue(&client(), None, instant()).unwrap();

        assert_eq!(claims.iat, instant().timestamp());
        assert_eq!(claims.nbf, claims.iat);
        assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
        assert_eq!(claims.aud, "1");
        assert!(claims.sub.is_none());
    }

    #[test]
    fn test_issue_with_subject() {
        let claims = ClaimSet::issue(&client(), Some("user-9"), instant()).unwrap();
        assert_eq!(claims.subject(), Some("user-9"));
    }

    #[test]
    fn test_empty_subject_is_kept() {
        let claims = ClaimSet::issue(&client(), Some(""), instant()).unwrap();
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["sub"], "");
    }

    #[test]
    fn test_absent_subject_is_omitted() {
        let claims = ClaimSet::issue(&client(), None, instant()).unwrap();
        let json = serde_json::to_value(&claims).unwrap();

        assert!(json.get("sub").is_none());
        assert_eq!(json["aud"], "1");
        assert_eq!(json["iat"], instant().timestamp());
    }

    #[test]
    fn test_issue_out_of_range() {
        let err = ClaimSet::issue(&client(), None, DateTime::<Utc>::MAX_UTC).unwrap_err();
        assert_eq!(err.to_string(), "Internal error: Token expiry is out of range");
    }

    #[test]
    fn test_time_views() {
        let claims = ClaimSet::issue(&client(), None, instant()).unwrap();

        assert_eq!(claims.issued_at(), Some(instant()));
        assert_eq!(claims.not_before(), Some(instant()));
        assert_eq!(claims.expires_at(), Some(instant() + Duration::days(30)));
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = ClaimSet::issue(&client(), None, instant()).unwrap();
        let exp = instant() + Duration::days(30);

        assert!(!claims.is_expired_at(exp - Duration::seconds(1)));
        assert!(claims.is_expired_at(exp));
    }

    #[test]
    fn test_not_before_boundary() {
        let claims = ClaimSet::issue(&client(), None, instant()).unwrap();

        assert!(claims.is_active_at(instant()));
        assert!(!claims.is_active_at(instant() - Duration::seconds(1)));
    }
}

//! Client identity entity and related types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::provider::SecretProvider;
use super::validation::{validate_client_id, validate_secret, ClientValidationError};
use crate::domain::DomainError;

/// Client identifier - the relying party, rendered verbatim as the token audience
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientId(String);

impl ClientId {
    /// Create a new ClientId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, ClientValidationError> {
        let id = id.into();
        validate_client_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for ClientId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl TryFrom<String> for ClientId {
    type Error = ClientValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ClientId {
    type Error = ClientValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientId> for String {
    fn from(id: ClientId) -> Self {
        id.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared HMAC secret for a client. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Create a secret from raw bytes, rejecting empty material
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, ClientValidationError> {
        let bytes = bytes.into();
        validate_secret(&bytes)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([hidden])")
    }
}

/// The relying party tokens are issued for and verified against
#[derive(Debug, Clone)]
pub struct ClientIdentity {
    id: ClientId,
    secret: SecretKey,
    name: Option<String>,
}

impl ClientIdentity {
    /// Create an identity from an id and raw secret bytes.
    ///
    /// An empty secret is a configuration error: every token for the client
    /// would otherwise be signed with a worthless key.
    pub fn new(id: ClientId, secret: impl Into<Vec<u8>>) -> Result<Self, DomainError> {
        let secret = SecretKey::new(secret)?;
        Ok(Self::from_parts(id, secret))
    }

    /// Create an identity from an already validated secret
    pub fn from_parts(id: ClientId, secret: SecretKey) -> Self {
        Self {
            id,
            secret,
            name: None,
        }
    }

    /// Create an identity whose secret is supplied by a provider
    pub fn from_provider(id: ClientId, provider: &dyn SecretProvider) -> Result<Self, DomainError> {
        let secret = provider.secret_for(&id)?;
        tracing::debug!(
            client_id = %id,
            provider = provider.provider_name(),
            "Resolved client secret"
        );
        Ok(Self::from_parts(id, secret))
    }

    /// Attach a descriptive name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> &ClientId {
        &self.id
    }

    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Audience value every token for this client carries
    pub fn audience(&self) -> &str {
        self.id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::MockSecretProvider;

    #[test]
    fn test_client_id_from_integer() {
        let id = ClientId::from(1u64);
        assert_eq!(id.as_str(), "1");
        assert_eq!(id.to_string(), "1");
    }

    #[test]
    fn test_client_id_rejects_empty() {
        assert_eq!(ClientId::new(""), Err(ClientValidationError::EmptyId));
    }

    #[test]
    fn test_client_id_serde_validates() {
        let id: ClientId = serde_json::from_str("\"web\"").unwrap();
        assert_eq!(id.as_str(), "web");

        let result: Result<ClientId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_identity_rejects_empty_secret() {
        let result = ClientIdentity::new(ClientId::from(1), Vec::<u8>::new());
        let err = result.unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_identity_accessors() {
        let client = ClientIdentity::new(ClientId::from(7), "s3cret")
            .unwrap()
            .with_name("browser");

        assert_eq!(client.id().as_str(), "7");
        assert_eq!(client.audience(), "7");
        assert_eq!(client.secret().as_bytes(), b"s3cret");
        assert_eq!(client.name(), Some("browser"));
    }

    #[test]
    fn test_debug_hides_secret() {
        let client = ClientIdentity::new(ClientId::from(1), "very-private").unwrap();
        let rendered = format!("{:?}", client);

        assert!(!rendered.contains("very-private"));
        assert!(rendered.contains("[hidden]"));
    }

    #[test]
    fn test_from_provider() {
        let mut provider = MockSecretProvider::new();
        provider
            .expect_secret_for()
            .withf(|id| id.as_str() == "42")
            .times(1)
            .returning(|_| Ok(SecretKey::new("provided").unwrap()));
        provider.expect_provider_name().return_const("mock");

        let client = ClientIdentity::from_provider(ClientId::from(42), &provider).unwrap();
        assert_eq!(client.secret().as_bytes(), b"provided");
    }

    #[test]
    fn test_from_provider_propagates_error() {
        let mut provider = MockSecretProvider::new();
        provider
            .expect_secret_for()
            .returning(|_| Err(DomainError::configuration("no secret")));

        let result = ClientIdentity::from_provider(ClientId::from(1), &provider);
        assert!(result.unwrap_err().is_configuration());
    }
}

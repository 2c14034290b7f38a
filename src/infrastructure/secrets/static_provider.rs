use crate::domain::{ClientId, DomainError, SecretKey, SecretProvider};

use super::encoding::decode_secret_value;

/// Secret provider that hands out one fixed secret
#[derive(Debug, Clone)]
pub struct StaticSecretProvider {
    secret: SecretKey,
}

impl StaticSecretProvider {
    pub fn new(secret: SecretKey) -> Self {
        Self { secret }
    }

    /// Build from a textual value (`base64:`, `hex:` or plain)
    pub fn from_value(raw: &str) -> Result<Self, DomainError> {
        Ok(Self::new(decode_secret_value(raw)?))
    }
}

impl SecretProvider for StaticSecretProvider {
    fn secret_for(&self, _client_id: &ClientId) -> Result<SecretKey, DomainError> {
        Ok(self.secret.clone())
    }

    fn provider_name(&self) -> &'static str {
        "static"
    }
}

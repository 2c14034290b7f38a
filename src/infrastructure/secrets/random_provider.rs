use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::{ClientId, DomainError, SecretKey, SecretProvider};

/// Length of generated secrets, matching the HS256 output size
pub const DEFAULT_SECRET_LENGTH: usize = 32;

/// Secret provider that generates fresh key material from the OS RNG.
///
/// Every call yields a new secret, so the resulting identity must be kept
/// for as long as its tokens need to verify.
#[derive(Debug, Clone)]
pub struct RandomSecretProvider {
    length: usize,
}

impl RandomSecretProvider {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn generate(&self) -> Result<SecretKey, DomainError> {
        if self.length == 0 {
            return Err(DomainError::configuration(
                "Random secret length must be greater than zero",
            ));
        }

        let mut bytes = vec![0u8; self.length];
        OsRng.fill_bytes(&mut bytes);

        Ok(SecretKey::new(bytes)?)
    }
}

impl Default for RandomSecretProvider {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_LENGTH)
    }
}

impl SecretProvider for RandomSecretProvider {
    fn secret_for(&self, _client_id: &ClientId) -> Result<SecretKey, DomainError> {
        self.generate()
    }

    fn provider_name(&self) -> &'static str {
        "random"
    }
}

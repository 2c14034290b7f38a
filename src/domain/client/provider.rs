use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::entity::{ClientId, SecretKey};
use crate::domain::DomainError;

/// Source of client secrets (static configuration, environment, generated)
#[cfg_attr(test, automock)]
pub trait SecretProvider: Send + Sync + Debug {
    /// Resolve the secret for the given client
    fn secret_for(&self, client_id: &ClientId) -> Result<SecretKey, DomainError>;

    /// Get provider name for logging/debugging
    fn provider_name(&self) -> &'static str;
}

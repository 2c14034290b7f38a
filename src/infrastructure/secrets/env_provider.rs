use std::env;

use crate::domain::{ClientId, DomainError, SecretKey, SecretProvider};

use super::encoding::decode_secret_value;

/// Default prefix for per-client secret variables
pub const DEFAULT_ENV_PREFIX: &str = "CLIENT_SECRET";

#[derive(Debug, Clone)]
enum EnvSource {
    /// One variable serves every client
    Variable(String),
    /// `<PREFIX>_<CLIENT_ID>`, one variable per client
    Prefix(String),
}

/// Secret provider that reads from environment variables
#[derive(Debug, Clone)]
pub struct EnvSecretProvider {
    source: EnvSource,
}

impl EnvSecretProvider {
    pub fn with_variable(name: impl Into<String>) -> Self {
        Self {
            source: EnvSource::Variable(name.into()),
        }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            source: EnvSource::Prefix(prefix.into()),
        }
    }

    /// Name of the variable consulted for `client_id`
    pub fn variable_for(&self, client_id: &ClientId) -> String {
        match &self.source {
            EnvSource::Variable(name) => name.clone(),
            EnvSource::Prefix(prefix) => {
                let suffix: String = client_id
                    .as_str()
                    .chars()
                    .map(|c| {
                        if c.is_ascii_alphanumeric() {
                            c.to_ascii_uppercase()
                        } else {
                            '_'
                        }
                    })
                    .collect();
                format!("{}_{}", prefix, suffix)
            }
        }
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_ENV_PREFIX)
    }
}

impl SecretProvider for EnvSecretProvider {
    fn secret_for(&self, client_id: &ClientId) -> Result<SecretKey, DomainError> {
        let variable = self.variable_for(client_id);

        let raw = env::var(&variable).map_err(|_| {
            DomainError::configuration(format!(
                "Environment variable '{}' not set for client '{}'",
                variable, client_id
            ))
        })?;

        decode_secret_value(&raw)
    }

    fn provider_name(&self) -> &'static str {
        "env"
    }
}

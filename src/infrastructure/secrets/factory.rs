use serde::Deserialize;

use super::{EnvSecretProvider, RandomSecretProvider, StaticSecretProvider};
use super::env_provider::DEFAULT_ENV_PREFIX;
use super::random_provider::DEFAULT_SECRET_LENGTH;
use crate::domain::{DomainError, SecretProvider};

/// Where a client's secret comes from
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SecretSourceConfig {
    /// Inline value (`base64:`, `hex:` or plain text)
    Static { value: String },
    /// Environment variable, either fixed or derived from the client ID
    Env {
        #[serde(default)]
        variable: Option<String>,
        #[serde(default = "default_env_prefix")]
        prefix: String,
    },
    /// Freshly generated on every start
    Random {
        #[serde(default = "default_secret_length")]
        length: usize,
    },
}

fn default_env_prefix() -> String {
    DEFAULT_ENV_PREFIX.to_string()
}

fn default_secret_length() -> usize {
    DEFAULT_SECRET_LENGTH
}

impl Default for SecretSourceConfig {
    fn default() -> Self {
        Self::Env {
            variable: None,
            prefix: default_env_prefix(),
        }
    }
}

/// Factory for creating secret providers
#[derive(Debug)]
pub struct SecretProviderFactory;

impl SecretProviderFactory {
    /// Create a secret provider from configuration
    pub fn create(config: &SecretSourceConfig) -> Result<Box<dyn SecretProvider>, DomainError> {
        match config {
            SecretSourceConfig::Static { value } => {
                Ok(Box::new(StaticSecretProvider::from_value(value)?))
            }

            SecretSourceConfig::Env { variable, prefix } => {
                let provider = match variable {
                    Some(name) => EnvSecretProvider::with_variable(name),
                    None => EnvSecretProvider::with_prefix(prefix),
                };
                Ok(Box::new(provider))
            }

            SecretSourceConfig::Random { length } => {
                Ok(Box::new(RandomSecretProvider::new(*length)))
            }
        }
    }
}

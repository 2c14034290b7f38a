use serde::Deserialize;

use crate::domain::{ClientId, ClientIdentity, DomainError};
use crate::infrastructure::secrets::{SecretProviderFactory, SecretSourceConfig};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// The client tokens are issued for
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_client_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub secret: SecretSourceConfig,
}

fn default_client_id() -> String {
    "1".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            id: default_client_id(),
            name: None,
            secret: SecretSourceConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Build the configured client identity, resolving its secret
    pub fn identity(&self) -> Result<ClientIdentity, DomainError> {
        let id = ClientId::new(self.id.clone())?;
        let provider = SecretProviderFactory::create(&self.secret)?;
        let identity = ClientIdentity::from_provider(id, provider.as_ref())?;

        Ok(match &self.name {
            Some(name) => identity.with_name(name),
            None => identity,
        })
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.client.id, "1");
        assert_eq!(config.client.secret, SecretSourceConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = from_toml(
            r#"
            [logging]
            level = "debug"
            format = "json"

            [client]
            id = "web"
            name = "Browser client"

            [client.secret]
            type = "static"
            value = "hex:0011"
            "#,
        );

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.client.id, "web");

        let identity = config.client.identity().unwrap();
        assert_eq!(identity.audience(), "web");
        assert_eq!(identity.name(), Some("Browser client"));
        assert_eq!(identity.secret().as_bytes(), &[0x00, 0x11]);
    }

    #[test]
    fn test_identity_rejects_empty_id() {
        let config = ClientConfig {
            id: String::new(),
            name: None,
            secret: SecretSourceConfig::Random { length: 32 },
        };

        assert!(config.identity().is_err());
    }

    #[test]
    fn test_identity_missing_env_secret_is_configuration_error() {
        let config = ClientConfig {
            id: "1".to_string(),
            name: None,
            secret: SecretSourceConfig::Env {
                variable: Some("TEST_APP_CONFIG_SECRET_UNSET".to_string()),
                prefix: String::new(),
            },
        };

        assert!(config.identity().unwrap_err().is_configuration());
    }
}

//! Secret provider implementations

mod encoding;
mod env_provider;
mod factory;
mod random_provider;
mod static_provider;

pub use encoding::{decode_secret_value, encode_secret_value};
pub use env_provider::{EnvSecretProvider, DEFAULT_ENV_PREFIX};
pub use factory::{SecretProviderFactory, SecretSourceConfig};
pub use random_provider::{RandomSecretProvider, DEFAULT_SECRET_LENGTH};
pub use static_provider::StaticSecretProvider;

//! CLI module for client-token
//!
//! Provides subcommands for working with client tokens:
//! - `demo`: issue a token and decode it again (default)
//! - `issue`: print a token for the configured client
//! - `verify`: decode a token and print its claims
//! - `serve`: HTTP server for issuing and verifying tokens
//! - `keygen`: generate a random client secret

pub mod demo;
pub mod issue;
pub mod keygen;
pub mod serve;
pub mod verify;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::{ClientId, ClientIdentity, DomainError};
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::secrets::RandomSecretProvider;

/// client-token - signed, time-bounded tokens bound to a client identity
#[derive(Parser)]
#[command(name = "client-token")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Issue a token for the configured client and decode it again
    Demo,

    /// Print a new token for the configured client
    Issue(issue::IssueArgs),

    /// Validate a token and print its claims
    Verify(verify::VerifyArgs),

    /// Run the HTTP token server
    Serve,

    /// Generate a random client secret
    Keygen(keygen::KeygenArgs),
}

/// Load `.env` and configuration, then install logging
pub fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&config.logging);

    if let Err(e) = loaded {
        warn!("Failed to load configuration, using defaults: {}", e);
    }

    config
}

/// The configured client, or one with a throwaway secret when no secret is
/// configured. Tokens issued under a throwaway secret die with the process.
pub fn identity_or_ephemeral(config: &AppConfig) -> Result<ClientIdentity, DomainError> {
    match config.client.identity() {
        Ok(client) => Ok(client),
        Err(e) if e.is_configuration() => {
            warn!("{}; using a random secret for this run", e);
            let id = ClientId::new(config.client.id.clone())?;
            ClientIdentity::from_provider(id, &RandomSecretProvider::default())
        }
        Err(e) => Err(e),
    }
}

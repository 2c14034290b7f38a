//! Verify command - decode a token and print its claims

use anyhow::Context;
use clap::Args;

use crate::config::AppConfig;
use crate::infrastructure::auth::TokenCodec;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Token to validate
    pub token: String,
}

pub fn run(config: &AppConfig, args: &VerifyArgs) -> anyhow::Result<()> {
    let client = config.client.identity()?;
    let claims = TokenCodec::new()
        .decode(&client, args.token.trim())
        .context("Token rejected")?;

    println!("{}", serde_json::to_string_pretty(&claims)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::secrets::SecretSourceConfig;

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.client.secret = SecretSourceConfig::Static {
            value: "verify-secret".to_string(),
        };
        config
    }

    #[test]
    fn test_verify_accepts_own_token() {
        let config = config();
        let client = config.client.identity().unwrap();
        let token = TokenCodec::new().encode(&client, Some("u")).unwrap();

        assert!(run(&config, &VerifyArgs { token }).is_ok());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let result = run(
            &config(),
            &VerifyArgs {
                token: "not-a-token".to_string(),
            },
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Token rejected"));
    }
}

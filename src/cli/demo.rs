//! Demo command - issue a token with no subject, then decode it

use crate::config::AppConfig;
use crate::infrastructure::auth::TokenCodec;

use super::identity_or_ephemeral;

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    let client = identity_or_ephemeral(config)?;
    let codec = TokenCodec::new();

    let token = codec.encode(&client, None)?;
    println!("Encoded token is:\n{}\n", token);

    match codec.decode(&client, &token) {
        Ok(claims) => println!("Decoded token is:\n{}", serde_json::to_string_pretty(&claims)?),
        Err(e) => println!("Decoded token is:\n{}", e),
    }

    Ok(())
}

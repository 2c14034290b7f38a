//! Issue command - print a token for the configured client

use clap::Args;

use crate::config::AppConfig;
use crate::infrastructure::auth::TokenCodec;

#[derive(Args, Debug)]
pub struct IssueArgs {
    /// End-user ID to bind the token to
    #[arg(short, long)]
    pub subject: Option<String>,
}

pub fn run(config: &AppConfig, args: &IssueArgs) -> anyhow::Result<()> {
    let client = config.client.identity()?;
    let token = TokenCodec::new().encode(&client, args.subject.as_deref())?;

    println!("{}", token);
    Ok(())
}

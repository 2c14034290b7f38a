use clap::Parser;
use client_token::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cli::bootstrap();

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => cli::demo::run(&config),
        Command::Issue(args) => cli::issue::run(&config, &args),
        Command::Verify(args) => cli::verify::run(&config, &args),
        Command::Serve => cli::serve::run(&config).await,
        Command::Keygen(args) => cli::keygen::run(&args),
    }
}

//! Keygen command - print a random secret in `base64:` form

use clap::Args;

use crate::infrastructure::secrets::{
    encode_secret_value, RandomSecretProvider, DEFAULT_SECRET_LENGTH,
};

#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Secret length in bytes
    #[arg(short, long, default_value_t = DEFAULT_SECRET_LENGTH)]
    pub length: usize,
}

pub fn run(args: &KeygenArgs) -> anyhow::Result<()> {
    let secret = RandomSecretProvider::new(args.length).generate()?;

    println!("{}", encode_secret_value(&secret));
    Ok(())
}

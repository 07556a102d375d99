use anyhow::Result;
use clap::Parser;

use squish::{
    commands::{self, Cli},
    config::DEFAULT_LOG_FILTER,
};

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let cli = Cli::parse();
    println!("{}", commands::run(cli.command)?);

    Ok(())
}

//! `salem` - read, scale, and navigate the recipe book from a terminal.

use anyhow::Result;
use clap::Parser;

use salem_cli::cli::{Args, Command};
use salem_cli::commands;
use salem_cli::config::SalemConfig;
use salem_cli::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // `config init` must work even when the existing file does not parse
    let config = match &args.command {
        Command::Config { .. } => SalemConfig::default().with_env_overrides(),
        _ => SalemConfig::load(args.config.as_deref())?,
    };

    logging::init(args.verbose, &config.log_level);
    tracing::debug!(dataset = %config.dataset.display(), "Configuration resolved");

    commands::run(args, config).await?;
    Ok(())
}

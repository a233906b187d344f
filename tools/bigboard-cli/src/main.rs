//! # Big Board CLI Binary

use anyhow::Result;
use bigboard_cli::cli::{Cli, CliHandler};
use bigboard_cli::{config, logging};
use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = config::load_config(Some(&cli.config))?;

    // Initialize logging
    logging::initialize_logging_with_config(&config.logging)?;
    debug!("Configuration: {:?}", config);

    // Create CLI handler
    let handler = CliHandler::new(config)?;

    // Handle command
    handler.handle_command(cli.command).await?;

    Ok(())
}

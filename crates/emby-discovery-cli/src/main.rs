//! Emby discovery CLI - find Emby servers on the local network.
//!
//! Broadcasts the discovery probe and prints every server that answers
//! within the listening window, as a table or as JSON for scripting.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let options = commands::discovery_options(&cli)?;

    match cli.command {
        Commands::Discover(args) => commands::run_discover(args, options, cli.json, cli.quiet).await,
        Commands::Watch(args) => commands::run_watch(args, options, cli.json).await,
    }
}

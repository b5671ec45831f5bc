//! Discover command implementation.

use std::time::Duration;

use chrono::Utc;
use emby_discovery_core::{discover, DiscoveryOptions};
use indicatif::{ProgressBar, ProgressStyle};

use super::{filter_servers, name_filter};
use crate::cli::DiscoverArgs;
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the discover command
pub async fn run_discover(
    args: DiscoverArgs,
    options: DiscoveryOptions,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let filter = name_filter(args.filter_name.as_deref())?;
    let formatter = get_formatter(json);

    let spinner = if json || quiet {
        ProgressBar::hidden()
    } else {
        listening_spinner(options.listen_window)
    };

    let result = discover(options).await;
    spinner.finish_and_clear();

    let servers = filter_servers(result?, filter.as_ref());

    println!("{}", formatter.format_servers(&servers, Utc::now()));

    if servers.is_empty() && args.fail_if_empty {
        return Err(CliError::NoServersFound);
    }

    Ok(())
}

fn listening_spinner(window: Duration) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "Listening for Emby servers for {} ms...",
        window.as_millis()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

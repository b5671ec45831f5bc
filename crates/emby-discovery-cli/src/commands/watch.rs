//! Watch command implementation.

use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, Utc};
use colored::*;
use emby_discovery_core::{discover, DiscoveryError, DiscoveryInfo, DiscoveryOptions};
use tracing::warn;

use super::{filter_servers, name_filter};
use crate::cli::WatchArgs;
use crate::error::CliError;
use crate::output::{JsonOutput, OutputFormatter, TableOutput};

/// Run the watch command
///
/// Every round is an independent discovery session. A failed round is
/// logged and retried on the next tick.
pub async fn run_watch(
    args: WatchArgs,
    options: DiscoveryOptions,
    json: bool,
) -> Result<(), CliError> {
    let filter = name_filter(args.filter_name.as_deref())?;
    let interval = Duration::from_secs(args.interval.max(1));

    if !json {
        println!(
            "{}\n",
            TableOutput::new().format_message("Watching for Emby servers (press Ctrl+C to stop)...")
        );
    }

    watch_rounds(
        tokio::signal::ctrl_c(),
        interval,
        || discover(options.clone()),
        |result| {
            match result {
                Ok(servers) => {
                    let servers = filter_servers(servers, filter.as_ref());
                    if !json {
                        print!("\x1B[2J\x1B[1;1H");
                    }
                    println!("{}", render_round(&servers, json, Utc::now()));
                    io::stdout().flush()?;
                }
                Err(e) => warn!("Discovery round failed: {}", e),
            }
            Ok(())
        },
    )
    .await?;

    Ok(())
}

/// Run rounds separated by `interval` until `shutdown` resolves.
///
/// `shutdown` stays registered across rounds and pauses, so a signal that
/// arrives mid-round ends the loop without waiting for the round to finish.
/// Returns the number of rounds that completed.
pub async fn watch_rounds<Sd, R, Fut, H>(
    shutdown: Sd,
    interval: Duration,
    mut round: R,
    mut on_round: H,
) -> Result<usize, CliError>
where
    Sd: Future,
    R: FnMut() -> Fut,
    Fut: Future<Output = Result<Vec<DiscoveryInfo>, DiscoveryError>>,
    H: FnMut(Result<Vec<DiscoveryInfo>, DiscoveryError>) -> Result<(), CliError>,
{
    tokio::pin!(shutdown);
    let mut completed = 0;

    loop {
        let result = tokio::select! {
            result = round() => result,
            _ = &mut shutdown => return Ok(completed),
        };
        completed += 1;
        on_round(result)?;

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = &mut shutdown => return Ok(completed),
        }
    }
}

/// Render one round: a compact JSON line, or a titled table.
pub fn render_round(servers: &[DiscoveryInfo], json: bool, scanned_at: DateTime<Utc>) -> String {
    if json {
        return JsonOutput::new().format_servers_line(servers, scanned_at);
    }

    format!(
        "{}\n{}\n\n{}",
        "Emby Server Watch".bold(),
        "Press Ctrl+C to stop".dimmed(),
        TableOutput::new().format_servers(servers, scanned_at)
    )
}

//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};

/// Emby discovery CLI - find Emby servers on the local network
#[derive(Parser, Debug)]
#[command(name = "emby-discovery")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Probe send timeout in milliseconds (also the listening window unless --window is set)
    #[arg(long, global = true, default_value = "1000", env = "EMBY_DISCOVERY_TIMEOUT")]
    pub timeout: u64,

    /// Listening window in milliseconds
    #[arg(long, global = true, env = "EMBY_DISCOVERY_WINDOW")]
    pub window: Option<u64>,

    /// Discovery port the probe is sent to
    #[arg(long, global = true, default_value = "7359", env = "EMBY_DISCOVERY_PORT")]
    pub port: u16,

    /// Probe destination address
    #[arg(long, global = true, default_value = "255.255.255.255")]
    pub target: String,

    /// Verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one discovery session and print the servers found
    Discover(DiscoverArgs),

    /// Repeat discovery until interrupted
    Watch(WatchArgs),
}

// ==================== Discover ====================

#[derive(Args, Debug)]
pub struct DiscoverArgs {
    /// Only keep servers whose name matches this pattern (case-insensitive)
    #[arg(long)]
    pub filter_name: Option<String>,

    /// Exit non-zero when no server answered
    #[arg(long)]
    pub fail_if_empty: bool,
}

// ==================== Watch ====================

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Seconds between discovery rounds
    #[arg(short, long, default_value = "5")]
    pub interval: u64,

    /// Only keep servers whose name matches this pattern (case-insensitive)
    #[arg(long)]
    pub filter_name: Option<String>,
}

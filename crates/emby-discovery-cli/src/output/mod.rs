//! Output formatting for CLI results.

pub mod json;
pub mod table;

pub use json::JsonOutput;
pub use table::TableOutput;

use chrono::{DateTime, Utc};
use emby_discovery_core::DiscoveryInfo;

/// Output formatter trait
pub trait OutputFormatter {
    /// Format the servers found by one discovery session
    fn format_servers(&self, servers: &[DiscoveryInfo], scanned_at: DateTime<Utc>) -> String;

    /// Format a generic message
    fn format_message(&self, message: &str) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TableOutput::new())
    }
}

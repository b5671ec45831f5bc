//! Table-formatted output for CLI.

use chrono::{DateTime, Local, Utc};
use colored::*;
use comfy_table::{Cell, ContentArrangement, Table};
use emby_discovery_core::DiscoveryInfo;

use super::OutputFormatter;

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

impl OutputFormatter for TableOutput {
    fn format_servers(&self, servers: &[DiscoveryInfo], scanned_at: DateTime<Utc>) -> String {
        let scanned = scanned_at.with_timezone(&Local).format("%H:%M:%S");

        if servers.is_empty() {
            return format!("No servers found (scanned at {}).", scanned);
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Name", "Address", "Id", "Endpoint", "Version"]);

        for server in servers {
            table.add_row(vec![
                Cell::new(server.display_name()),
                Cell::new(&server.address),
                Cell::new(or_dash(server.id.as_deref())),
                Cell::new(or_dash(server.endpoint_address.as_deref())),
                Cell::new(or_dash(server.version.as_deref())),
            ]);
        }

        format!(
            "{}\n\nFound {} server(s) at {}",
            table,
            servers.len(),
            scanned
        )
    }

    fn format_message(&self, message: &str) -> String {
        message.bold().to_string()
    }
}

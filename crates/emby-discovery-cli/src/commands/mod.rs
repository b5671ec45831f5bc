//! Command implementations.

pub mod discover;
pub mod watch;

pub use discover::run_discover;
pub use watch::run_watch;

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use emby_discovery_core::{DiscoveryInfo, DiscoveryOptions};
use regex::{Regex, RegexBuilder};

use crate::cli::Cli;
use crate::error::CliError;

/// Build session options from the global flags.
pub fn discovery_options(cli: &Cli) -> Result<DiscoveryOptions, CliError> {
    let ip: IpAddr = cli.target.parse().map_err(|_| {
        CliError::InvalidArgument(format!("'{}' is not an IP address", cli.target))
    })?;

    if !ip.is_ipv4() {
        return Err(CliError::InvalidArgument(
            "Only IPv4 targets are supported".to_string(),
        ));
    }

    let mut options = DiscoveryOptions::with_timeout_ms(cli.timeout);
    options.target = SocketAddr::new(ip, cli.port);
    if let Some(window) = cli.window {
        options.listen_window = Duration::from_millis(window);
    }

    Ok(options)
}

/// Compile a case-insensitive name filter.
pub fn name_filter(pattern: Option<&str>) -> Result<Option<Regex>, CliError> {
    pattern
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(|e| CliError::InvalidArgument(format!("Invalid name filter: {}", e)))
        })
        .transpose()
}

pub fn filter_servers(servers: Vec<DiscoveryInfo>, filter: Option<&Regex>) -> Vec<DiscoveryInfo> {
    match filter {
        Some(re) => servers
            .into_iter()
            .filter(|s| re.is_match(s.display_name()))
            .collect(),
        None => servers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn server(name: &str) -> DiscoveryInfo {
        DiscoveryInfo {
            address: format!("http://{}.lan:8096", name.to_lowercase()),
            id: None,
            name: Some(name.to_string()),
            endpoint_address: None,
            version: None,
        }
    }

    #[test]
    fn test_discovery_options_from_flags() {
        let cli = Cli::try_parse_from([
            "emby-discovery",
            "--timeout",
            "400",
            "--port",
            "7000",
            "--target",
            "192.168.1.255",
            "discover",
        ])
        .unwrap();

        let options = discovery_options(&cli).unwrap();
        assert_eq!(options.target.to_string(), "192.168.1.255:7000");
        assert_eq!(options.send_timeout, Duration::from_millis(400));
        assert_eq!(options.listen_window, Duration::from_millis(400));
    }

    #[test]
    fn test_window_overrides_listen_only() {
        let cli =
            Cli::try_parse_from(["emby-discovery", "--window", "2500", "discover"]).unwrap();

        let options = discovery_options(&cli).unwrap();
        assert_eq!(options.send_timeout, Duration::from_millis(1000));
        assert_eq!(options.listen_window, Duration::from_millis(2500));
    }

    #[test]
    fn test_rejects_bad_target() {
        let cli =
            Cli::try_parse_from(["emby-discovery", "--target", "nas.local", "discover"]).unwrap();
        assert!(matches!(
            discovery_options(&cli),
            Err(CliError::InvalidArgument(_))
        ));

        let cli = Cli::try_parse_from(["emby-discovery", "--target", "::1", "discover"]).unwrap();
        assert!(discovery_options(&cli).is_err());
    }

    #[test]
    fn test_filter_servers_by_name() {
        let filter = name_filter(Some("^living")).unwrap();
        let servers = vec![server("Living Room"), server("Basement")];

        let kept = filter_servers(servers.clone(), filter.as_ref());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name.as_deref(), Some("Living Room"));

        assert_eq!(filter_servers(servers, None).len(), 2);
    }

    #[test]
    fn test_invalid_filter() {
        assert!(matches!(name_filter(Some("(")), Err(CliError::InvalidArgument(_))));
        assert!(name_filter(None).unwrap().is_none());
    }
}

//! Command-line interface definitions.
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--server-token` | `$UBER_SERVER_TOKEN` | API key for read-only access |
//! | `--check-interval` | `0` | Seconds between checks; 0 runs once |
//! | `--timeout` | `30` | HTTP request timeout in seconds |
//! | `--api-url` | `https://api.uber.com` | API base URL |

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::coordinate::Location;
use crate::provider::DEFAULT_API_URL;

/// Uberfare provides CLI access to the Uber API for collecting fares.
///
/// It currently supports the fare 'estimate', where a price range (low, high)
/// is provided instead of the exact fare. Estimates only need a server token
/// for API access; upfront fares require OAuth2 and are not supported.
#[derive(Debug, Parser)]
#[command(name = "uberfare", version)]
pub struct Cli {
    /// Server token used as the API key. Overrides $UBER_SERVER_TOKEN.
    #[arg(long, short = 't', global = true, env = "UBER_SERVER_TOKEN", hide_env_values = true)]
    pub server_token: Option<String>,

    /// Interval in seconds to periodically check the fares. If unset or 0,
    /// the API is queried only once.
    #[arg(long, short = 'i', global = true, default_value_t = 0)]
    pub check_interval: u64,

    /// HTTP request timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,

    /// Base URL of the fare API.
    #[arg(long, global = true, env = "UBER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Retrieves the fare estimates from <ORIGIN> to <DESTINATION>.
    ///
    /// Both values must be in the format LATITUDE,LONGITUDE (e.g. 14.5547,121.0244).
    /// Without --output-file the estimates are printed as a table.
    Estimate {
        /// Start point as LATITUDE,LONGITUDE
        #[arg(allow_hyphen_values = true)]
        origin: Location,

        /// End point as LATITUDE,LONGITUDE
        #[arg(allow_hyphen_values = true)]
        destination: Location,

        /// CSV file to append the estimates to
        #[arg(long, short = 'o')]
        output_file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_estimate() {
        let cli = Cli::try_parse_from([
            "uberfare",
            "--server-token",
            "TOKEN",
            "--check-interval",
            "120",
            "estimate",
            "14.5547,121.0244",
            "14.5176, 121.0509",
            "--output-file",
            "out.csv",
        ])
        .unwrap();

        assert_eq!(cli.server_token.as_deref(), Some("TOKEN"));
        assert_eq!(cli.check_interval, 120);
        let Command::Estimate {
            origin,
            destination,
            output_file,
        } = cli.command;
        assert_eq!(origin.latitude, "14.5547");
        assert_eq!(destination.longitude, "121.0509");
        assert_eq!(output_file, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["uberfare", "estimate", "1,2", "3,4"]).unwrap();

        assert_eq!(cli.check_interval, 0);
        assert_eq!(cli.timeout, 30);
        let Command::Estimate { output_file, .. } = cli.command;
        assert!(output_file.is_none());
    }

    #[test]
    fn test_negative_coordinates() {
        let cli = Cli::try_parse_from(["uberfare", "estimate", "-33.86,151.2", "-33.9,151.1"])
            .unwrap();
        let Command::Estimate { origin, .. } = cli.command;
        assert_eq!(origin.latitude, "-33.86");
    }

    #[test]
    fn test_rejects_malformed_coordinates() {
        let err = Cli::try_parse_from(["uberfare", "estimate", "abc,123", "3,4"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}

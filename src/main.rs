//! Uberfare CLI
//!
//! Collects fare estimates between two points, once or on an interval.
//!
//! # Usage
//!
//! ```bash
//! uberfare --check-interval 120 estimate 14.5547,121.0244 14.5176,121.0509 -o fares.csv
//! ```
//!
//! # Environment Variables
//!
//! - `UBER_SERVER_TOKEN`: server token used when `--server-token` is not given
//! - `UBER_API_URL`: API base URL override
//! - `RUST_LOG`: logging verbosity (defaults to `info`)

use clap::Parser;
use std::io;
use std::process;
use uberfare::cli::{Cli, Command};
use uberfare::{
    get_read_only_client, ClientConfig, Coordinates, FareError, Output, Poller, Result,
    DISPLAY_FIELDS, ESTIMATE_FIELDS,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let Command::Estimate {
        origin,
        destination,
        output_file,
    } = cli.command;

    let token = cli.server_token.ok_or(FareError::MissingToken)?;
    let config = ClientConfig::default()
        .with_api_url(cli.api_url)
        .with_timeout(cli.timeout);
    let client = get_read_only_client(&token, config)?;

    let coordinates = Coordinates::new(&origin, &destination);
    let output = Output::select(output_file, io::stdout(), ESTIMATE_FIELDS, DISPLAY_FIELDS);

    Poller::new(client, coordinates, output, cli.check_interval).run()
}

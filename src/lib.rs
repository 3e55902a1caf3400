//! # Uberfare
//!
//! Periodically collects ride fare estimates between two fixed points and
//! records them to a CSV file or prints them as a console table.
//!
//! ## Design Principles
//!
//! - **Validate first**: coordinates are parsed before any network call
//! - **Append-only output**: CSV files are never truncated; the header is
//!   written only when the file is empty
//! - **Fixed columns**: every CSV row follows the configured field list
//! - **Fail fast**: a failed request ends the run; there is no retry
//!
//! ## Example
//!
//! ```no_run
//! use uberfare::{get_read_only_client, ClientConfig, Coordinates, Output, Poller};
//! use uberfare::{DISPLAY_FIELDS, ESTIMATE_FIELDS};
//!
//! let client = get_read_only_client("SERVER_TOKEN", ClientConfig::default()).unwrap();
//! let coordinates = Coordinates::parse("14.5547,121.0244", "14.5176,121.0509").unwrap();
//! let output = Output::select(None, std::io::stdout(), ESTIMATE_FIELDS, DISPLAY_FIELDS);
//!
//! Poller::new(client, coordinates, output, 0).run().unwrap();
//! ```

pub mod cli;
pub mod coordinate;
pub mod dump;
pub mod error;
pub mod poller;
pub mod provider;
pub mod record;

pub use coordinate::{Coordinates, Location};
pub use dump::{CsvDumper, CsvOutput, Dump, Output, TableDumper};
pub use error::{FareError, Result};
pub use poller::Poller;
pub use provider::{get_read_only_client, ClientConfig, FareProvider, UberClient};
pub use record::{add_timestamp, PriceRecord, DISPLAY_FIELDS, ESTIMATE_FIELDS};

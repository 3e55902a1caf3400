//! The fetch -> annotate -> dump -> sleep loop.

use std::thread;
use std::time::Duration;

use log::debug;

use crate::coordinate::Coordinates;
use crate::dump::Dump;
use crate::error::Result;
use crate::provider::FareProvider;
use crate::record::add_timestamp;

/// Polls a provider for one coordinate pair and dumps every batch.
///
/// The provider and coordinates are fixed for the lifetime of the poller.
/// Any error from a cycle ends the loop and is returned to the caller.
pub struct Poller<P, D> {
    provider: P,
    coordinates: Coordinates,
    output: D,
    interval: Option<Duration>,
}

impl<P: FareProvider, D: Dump> Poller<P, D> {
    /// `check_interval` in seconds; 0 means run a single cycle.
    pub fn new(provider: P, coordinates: Coordinates, output: D, check_interval: u64) -> Self {
        let interval = (check_interval > 0).then(|| Duration::from_secs(check_interval));
        Poller {
            provider,
            coordinates,
            output,
            interval,
        }
    }

    /// Runs one fetch-and-dump cycle, returning the number of records fetched.
    pub fn run_cycle(&mut self) -> Result<usize> {
        let prices = self.provider.price_estimates(&self.coordinates)?;
        debug!("Fetched {} price estimates", prices.len());

        if self.output.wants_timestamp() {
            self.output.dump(&add_timestamp(&prices))?;
        } else {
            self.output.dump(&prices)?;
        }

        Ok(prices.len())
    }

    /// Runs once, or forever at the configured interval.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.run_cycle()?;

            match self.interval {
                None => return Ok(()),
                Some(interval) => {
                    debug!("Sleeping {}s until next check", interval.as_secs());
                    thread::sleep(interval);
                }
            }
        }
    }

    /// Returns the provider and output, consuming the poller.
    pub fn into_parts(self) -> (P, D) {
        (self.provider, self.output)
    }
}

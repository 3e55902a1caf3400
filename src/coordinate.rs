//! Coordinate parsing for `<LATITUDE>,<LONGITUDE>` arguments.
//!
//! Values are kept as the trimmed decimal strings the user typed, so they
//! reach the API exactly as given (no float round-tripping).

use crate::error::{FareError, Result};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// One side of a coordinate: digits, optional fraction, optional leading minus.
static DECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("Invalid regex"));

/// A single latitude/longitude pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub latitude: String,
    pub longitude: String,
}

impl FromStr for Location {
    type Err = FareError;

    /// Splits on the first comma and trims each side.
    ///
    /// Each side must be a decimal number: digits with an optional
    /// fractional part and an optional leading minus sign.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FareError::InvalidCoordinate {
            input: s.to_string(),
        };

        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let (lat, lon) = (lat.trim(), lon.trim());

        if !DECIMAL_REGEX.is_match(lat) || !DECIMAL_REGEX.is_match(lon) {
            return Err(invalid());
        }

        Ok(Location {
            latitude: lat.to_string(),
            longitude: lon.to_string(),
        })
    }
}

/// Start and end points of a fare estimate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub start_latitude: String,
    pub start_longitude: String,
    pub end_latitude: String,
    pub end_longitude: String,
}

impl Coordinates {
    /// Combines an origin and a destination into one request.
    pub fn new(origin: &Location, destination: &Location) -> Self {
        Coordinates {
            start_latitude: origin.latitude.clone(),
            start_longitude: origin.longitude.clone(),
            end_latitude: destination.latitude.clone(),
            end_longitude: destination.longitude.clone(),
        }
    }

    /// Parses both `<LATITUDE>,<LONGITUDE>` strings.
    pub fn parse(origin: &str, destination: &str) -> Result<Self> {
        let origin: Location = origin.parse()?;
        let destination: Location = destination.parse()?;
        Ok(Coordinates::new(&origin, &destination))
    }

    /// Query parameters in the order the API documents them.
    pub fn as_query(&self) -> [(&'static str, &str); 4] {
        [
            ("start_latitude", self.start_latitude.as_str()),
            ("start_longitude", self.start_longitude.as_str()),
            ("end_latitude", self.end_latitude.as_str()),
            ("end_longitude", self.end_longitude.as_str()),
        ]
    }
}

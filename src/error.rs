//! Error types for the fare collector.

use thiserror::Error;

/// Result type alias for fare collection operations
pub type Result<T> = std::result::Result<T, FareError>;

/// Errors that can occur while collecting and dumping fare estimates.
#[derive(Error, Debug)]
pub enum FareError {
    /// Failed to open or write the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing error
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Coordinate argument not in `<LATITUDE>,<LONGITUDE>` form
    #[error("Invalid coordinate '{input}'. Coordinates must be in the format: 123.23,42.1 <LATITUDE,LONGITUDE>")]
    InvalidCoordinate { input: String },

    /// Neither `--server-token` nor `UBER_SERVER_TOKEN` was provided
    #[error("Missing server token. Pass --server-token or set UBER_SERVER_TOKEN")]
    MissingToken,

    /// Server token contains characters not allowed in an HTTP header
    #[error("Invalid server token. The token must be printable ASCII without line breaks")]
    InvalidToken,

    /// The API rejected the server token
    #[error("Unauthorized (invalid server token)")]
    Unauthorized,

    /// The API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

impl FareError {
    /// Process exit code for this error.
    ///
    /// Validation problems exit with 2, matching the argument parser's own
    /// usage errors; everything else exits with 1.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidCoordinate { .. } | Self::MissingToken | Self::InvalidToken => 2,
            _ => 1,
        }
    }
}

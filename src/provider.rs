//! Fare estimate provider backed by the Uber Rides API.
//!
//! Only the read-only price estimate endpoint is used, which accepts a
//! server token. Upfront fares need OAuth2 and are not supported.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::coordinate::Coordinates;
use crate::error::{FareError, Result};
use crate::record::PriceRecord;

/// Default base URL for the Uber API.
pub const DEFAULT_API_URL: &str = "https://api.uber.com";

/// Path of the price estimate endpoint.
const PRICE_ESTIMATES_PATH: &str = "/v1.2/estimates/price";

/// Source of fare estimates for a pair of coordinates.
pub trait FareProvider {
    /// Issues one request and returns every price record, unmodified.
    fn price_estimates(&self, coordinates: &Coordinates) -> Result<Vec<PriceRecord>>;
}

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server token used as the API key
    pub server_token: String,
    /// Base URL for the API (defaults to production)
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a new config with the given server token.
    pub fn new(server_token: impl Into<String>) -> Self {
        Self {
            server_token: server_token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ClientConfig {
    /// Production settings with no token; see [`get_read_only_client`].
    fn default() -> Self {
        Self::new("")
    }
}

#[derive(Debug, Deserialize)]
struct PriceEstimatesResponse {
    prices: Vec<PriceRecord>,
}

/// Read-only Uber API client.
#[derive(Debug, Clone)]
pub struct UberClient {
    http: Client,
    estimates_url: String,
}

impl UberClient {
    /// Create a client that authenticates every request with the server token.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let mut token = HeaderValue::from_str(&format!("Token {}", config.server_token))
            .map_err(|_| FareError::InvalidToken)?;
        token.set_sensitive(true);
        headers.insert(AUTHORIZATION, token);
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en_US"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            estimates_url: format!(
                "{}{}",
                config.api_url.trim_end_matches('/'),
                PRICE_ESTIMATES_PATH
            ),
        })
    }
}

impl FareProvider for UberClient {
    fn price_estimates(&self, coordinates: &Coordinates) -> Result<Vec<PriceRecord>> {
        debug!(
            "GET {} from {},{} to {},{}",
            self.estimates_url,
            coordinates.start_latitude,
            coordinates.start_longitude,
            coordinates.end_latitude,
            coordinates.end_longitude
        );

        let response = self
            .http
            .get(&self.estimates_url)
            .query(&coordinates.as_query())
            .send()?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(FareError::Unauthorized);
        }
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(FareError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text()?;
        parse_price_estimates(&body)
    }
}

/// Credential source: builds a read-only client from a server token.
pub fn get_read_only_client(server_token: &str, config: ClientConfig) -> Result<UberClient> {
    if server_token.trim().is_empty() {
        return Err(FareError::MissingToken);
    }
    UberClient::new(ClientConfig {
        server_token: server_token.to_string(),
        ..config
    })
}

/// Extracts the `prices` array from a price estimate response body.
fn parse_price_estimates(body: &str) -> Result<Vec<PriceRecord>> {
    let response: PriceEstimatesResponse = serde_json::from_str(body)?;
    Ok(response.prices)
}

// Copyright 2025 the hexglobe authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HTTP client for the hexbot color service.
//!
//! The service returns pseudo-random colors as JSON:
//! `{ "colors": [ { "value": "#RRGGBB" }, ... ] }`. This is a best-effort
//! demo client: requests are issued once, and any transport or service
//! failure propagates unchanged to the caller.

use std::future::Future;

use log::debug;
use serde::Deserialize;

use crate::error::Error;

/// Default hexbot endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.noopschallenge.com/hexbot";

/// Smallest accepted color count per request.
pub const COUNT_MIN: u32 = 1;

/// Largest accepted color count per request.
pub const COUNT_MAX: u32 = 1000;

/// One color entry as returned by the service.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ColorRecord {
    /// Raw `#RRGGBB` text, validated later by the conversion layer.
    pub value: String,
}

/// Response body for a color request.
#[derive(Debug, Deserialize)]
pub struct ColorsResponse {
    pub colors: Vec<ColorRecord>,
}

/// Source of raw color records.
///
/// Implemented by [`HexBotClient`] for the real service; tests supply
/// their own implementations to exercise the aggregation layer without
/// a network.
pub trait ColorSource {
    /// Fetch `count` color records.
    fn fetch_colors(
        &self,
        count: u32,
    ) -> impl Future<Output = Result<Vec<ColorRecord>, Error>> + Send;
}

/// Validate a count supplied outside the valid range.
fn check_range(count: u32) -> Result<(), Error> {
    if (COUNT_MIN..=COUNT_MAX).contains(&count) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            value: i64::from(count),
            min: COUNT_MIN,
            max: COUNT_MAX,
        })
    }
}

/// Parse a count from user-supplied text.
///
/// This is where "not a number" is caught when a count arrives as text
/// from an interactive control; out-of-range values get the same range
/// check the client applies.
pub fn parse_count(text: &str) -> Result<u32, Error> {
    let value: i64 = text.trim().parse().map_err(|e| {
        Error::invalid_argument(format!("count {text:?} is not a number: {e}"))
    })?;

    if value < i64::from(COUNT_MIN) || value > i64::from(COUNT_MAX) {
        return Err(Error::OutOfRange {
            value,
            min: COUNT_MIN,
            max: COUNT_MAX,
        });
    }

    // Range check above keeps the cast lossless.
    Ok(value as u32)
}

/// Client for the hexbot color service.
#[derive(Debug, Clone)]
pub struct HexBotClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HexBotClient {
    /// Create a client against the default endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a client against a custom endpoint.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HexBotClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for HexBotClient {
    /// Request `count` colors with one `GET <endpoint>?count=<n>`.
    ///
    /// Fails with [`Error::OutOfRange`] before any network activity if
    /// `count` is outside [1, 1000]. No retry, no backoff.
    async fn fetch_colors(&self, count: u32) -> Result<Vec<ColorRecord>, Error> {
        check_range(count)?;

        debug!("Requesting {} colors from {}", count, self.endpoint);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("count", count)])
            .send()
            .await?
            .error_for_status()?;

        let body: ColorsResponse = response.json().await?;

        debug!("Received {} colors", body.colors.len());
        Ok(body.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_count_zero_rejected_before_network() {
        // An unroutable endpoint proves validation happens first.
        let client = HexBotClient::with_endpoint("http://127.0.0.1:1");
        let err = client.fetch_colors(0).await.unwrap_err();
        assert!(matches!(err, Error::OutOfRange { value: 0, .. }));
    }

    #[tokio::test]
    async fn test_count_too_large_rejected_before_network() {
        let client = HexBotClient::with_endpoint("http://127.0.0.1:1");
        let err = client.fetch_colors(1001).await.unwrap_err();
        assert!(matches!(err, Error::OutOfRange { value: 1001, .. }));
    }

    #[tokio::test]
    async fn test_network_failure_surfaces_as_remote() {
        let client = HexBotClient::with_endpoint("http://127.0.0.1:1");
        let err = client.fetch_colors(5).await.unwrap_err();
        assert!(matches!(err, Error::Remote(_)));
    }

    #[test]
    fn test_parse_count_accepts_valid_numbers() {
        assert_eq!(parse_count("1").unwrap(), 1);
        assert_eq!(parse_count("1000").unwrap(), 1000);
        assert_eq!(parse_count(" 42 ").unwrap(), 42);
    }

    #[test]
    fn test_parse_count_rejects_non_numbers() {
        assert!(matches!(parse_count("x"), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_count(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_count("1.5"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_count_rejects_out_of_range() {
        assert!(matches!(
            parse_count("0"),
            Err(Error::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            parse_count("1001"),
            Err(Error::OutOfRange { value: 1001, .. })
        ));
        assert!(matches!(
            parse_count("-3"),
            Err(Error::OutOfRange { value: -3, .. })
        ));
    }
}

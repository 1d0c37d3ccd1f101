//! HTTP client for the Malmö geocoding search endpoint.
//!
//! Wraps `reqwest` with endpoint-specific error handling and typed response
//! deserialization. One operation: free-text address search, returning the
//! raw hit array for the caller to resolve.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::SearchHit;

const DEFAULT_BASE_URL: &str = "https://geo.malmo.se/api/search";

/// Client for the geocoding search endpoint.
///
/// Use [`GeoSearchClient::new`] for production or
/// [`GeoSearchClient::with_base_url`] to point at a mock server in tests.
pub struct GeoSearchClient {
    client: Client,
    base_url: Url,
}

impl GeoSearchClient {
    /// Creates a new client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, GeocodeError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock, or a self-hosted endpoint).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// The full request URL for an address, with the query percent-encoded.
    #[must_use]
    pub fn search_url(&self, address: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("q", address);
        url
    }

    /// Searches for an address and returns the raw hit array.
    ///
    /// An empty array is a successful response; "no match" is the caller's
    /// decision, not an error.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::UnexpectedStatus`] on a non-2xx response, carrying
    ///   the HTTP status code.
    /// - [`GeocodeError::Http`] on network failure or timeout.
    /// - [`GeocodeError::Deserialize`] if the body is not a JSON array of
    ///   hit objects.
    pub async fn search(&self, address: &str) -> Result<Vec<SearchHit>, GeocodeError> {
        let url = self.search_url(address);
        tracing::debug!(url = %url, "geocode search");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

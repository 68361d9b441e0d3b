//! Nearby Search client and the paginated fetch loop
//!
//! The loop drives a `PageSource` rather than the HTTP client directly, so
//! the pacing delay and the token-based termination are exercised in tests
//! with canned pages instead of real network calls.

use crate::constants::api::NEARBY_SEARCH_URL;
use crate::error::{Error, Result};
use crate::places::{NearbyQuery, RawPlace, SearchPage};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// One-page fetch capability
///
/// Implementations must be thread-safe (Send + Sync); the pagination loop
/// holds a single instance for the whole sequence.
pub trait PageSource: Send + Sync {
    /// Fetch one page of results
    ///
    /// `page_token` is absent for the first request and carries the
    /// previous page's continuation token afterwards.
    fn fetch_page(
        &self,
        query: &NearbyQuery,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<SearchPage>> + Send;
}

/// Place-search API client holding the HTTP handle and the credential
///
/// Created once per run and reused for every page request.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl PlacesClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, NEARBY_SEARCH_URL)
    }

    /// Create a client against a non-default search endpoint
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Build the request URL for one page
    ///
    /// An empty keyword is omitted entirely, which the API treats as
    /// "match anything nearby". The key goes last and must never be logged.
    fn request_url(&self, query: &NearbyQuery, page_token: Option<&str>) -> String {
        let mut url = format!(
            "{}?location={},{}&radius={}",
            self.endpoint, query.location.lat, query.location.lng, query.radius_meters
        );

        if !query.keyword.is_empty() {
            url.push_str(&format!("&keyword={}", urlencoding::encode(&query.keyword)));
        }
        if query.open_now {
            url.push_str("&opennow=true");
        }
        if let Some(token) = page_token {
            url.push_str(&format!("&pagetoken={}", urlencoding::encode(token)));
        }
        url.push_str(&format!("&key={}", self.api_key));

        url
    }
}

impl PageSource for PlacesClient {
    async fn fetch_page(
        &self,
        query: &NearbyQuery,
        page_token: Option<&str>,
    ) -> Result<SearchPage> {
        let url = self.request_url(query, page_token);

        // reqwest errors embed the request URL, key included; strip it
        // before it can reach a message
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Nearby search request failed: {}", e.without_url())))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "Nearby search returned status: {}",
                response.status()
            )));
        }

        let page: SearchPage = response.json().await.map_err(|e| {
            Error::Parse(format!(
                "Failed to decode nearby search response: {}",
                e.without_url()
            ))
        })?;

        if !page.status_ok() {
            let mut message = page.status.clone();
            if let Some(detail) = &page.error_message {
                message = format!("{}: {}", message, detail);
            }
            return Err(Error::Api(message));
        }

        Ok(page)
    }
}

/// Fetch every page of a nearby search and concatenate the results
///
/// Fresh page tokens are not immediately valid upstream, so the loop waits
/// `page_delay` before each follow-up request. A failure on any page aborts
/// the whole fetch; there is no partial result and no resumption.
pub async fn fetch_nearby<S: PageSource>(
    source: &S,
    query: &NearbyQuery,
    page_delay: Duration,
) -> Result<Vec<RawPlace>> {
    let page = source.fetch_page(query, None).await?;
    debug!("Fetched page with {} results", page.results.len());

    let mut places = page.results;
    // An empty token means no further pages, same as an absent one
    let mut next_token = page.next_page_token.filter(|t| !t.is_empty());

    while let Some(token) = next_token {
        debug!("Waiting {:?} before requesting the next page", page_delay);
        tokio::time::sleep(page_delay).await;

        let page = source.fetch_page(query, Some(&token)).await?;
        debug!("Fetched page with {} results", page.results.len());

        places.extend(page.results);
        next_token = page.next_page_token.filter(|t| !t.is_empty());
    }

    Ok(places)
}

//! # Essenza Shops
//!
//! Shop-locator collaborator: given a fragrance name and a location, asks a
//! Places-style text-search endpoint for stores carrying it.
//!
//! This is presentation-layer I/O glue, deliberately outside the
//! recommender core: it returns at most [`MAX_RESULTS`] shops and an empty
//! list on ANY failure (network, quota, malformed response), so its
//! availability can never affect filter or recommend correctness.

use serde::Deserialize;
use tracing::warn;

/// Default search location when the caller supplies none.
pub const DEFAULT_LOCATION: &str = "Zurich";

/// Upper bound on returned shops.
pub const MAX_RESULTS: usize = 5;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";

/// One store carrying the requested fragrance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    pub name: String,
    pub address: String,
}

/// Places-style text-search response, reduced to the fields used here.
#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    results: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct Place {
    name: Option<String>,
    formatted_address: Option<String>,
}

/// Shop locator backed by a Places-style HTTP endpoint.
pub struct ShopFinder {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ShopFinder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the finder at a different endpoint (tests, proxies).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Find up to [`MAX_RESULTS`] shops near `location` carrying
    /// `item_name`. Never fails: any error is logged and mapped to an
    /// empty list.
    pub async fn find_shops(&self, item_name: &str, location: &str) -> Vec<Shop> {
        let query = format!("{item_name} perfume store near {location}");
        let request = self
            .client
            .get(&self.base_url)
            .query(&[("query", query.as_str()), ("key", self.api_key.as_str())]);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(item_name, error = %e, "shop lookup request failed");
                return Vec::new();
            }
        };

        match response.json::<PlacesResponse>().await {
            Ok(body) => shops_from_response(body),
            Err(e) => {
                warn!(item_name, error = %e, "shop lookup returned malformed body");
                Vec::new()
            }
        }
    }

    /// Same as [`find_shops`](Self::find_shops) with [`DEFAULT_LOCATION`].
    pub async fn find_shops_nearby(&self, item_name: &str) -> Vec<Shop> {
        self.find_shops(item_name, DEFAULT_LOCATION).await
    }
}

fn shops_from_response(body: PlacesResponse) -> Vec<Shop> {
    body.results
        .into_iter()
        .take(MAX_RESULTS)
        .map(|place| Shop {
            name: place.name.unwrap_or_else(|| "Unknown Shop".to_string()),
            address: place
                .formatted_address
                .unwrap_or_else(|| "No address available".to_string()),
        })
        .collect()
}

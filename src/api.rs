// API client module: contains a small blocking HTTP client that talks to
// the Open Food Facts API, plus the serde models for its responses and the
// pure functions that turn a raw body into something the UI can print.
// Everything is synchronous; one invocation performs at most one request.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Production endpoint. Overridable through `OPENFOODFACTS_URL`, which is
/// also how the integration tests point the binary at a local server.
const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Fixed per-request timeout in seconds. There is no retry on top of it.
const REQUEST_TIMEOUT_SECS: u64 = 8;

/// Results per page requested from the search endpoint.
const SEARCH_PAGE_SIZE: u32 = 20;

/// Simple API client that holds a reqwest blocking client and the base URL
/// of the Open Food Facts instance to query.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Envelope returned by the product endpoint. `status` is 1 when the
/// barcode is known; anything else means not found or error, with an
/// optional human-readable `status_verbose` alongside.
#[derive(Deserialize, Debug)]
pub struct ProductResponse {
    #[serde(default)]
    pub status: i64,
    pub status_verbose: Option<String>,
    pub product: Option<Product>,
}

/// The subset of product attributes this tool reads. Every field is
/// optional on the wire, so everything is an `Option` and the UI applies
/// the fallbacks.
#[derive(Deserialize, Debug, Default)]
pub struct Product {
    pub code: Option<String>,
    pub product_name: Option<String>,
    pub generic_name: Option<String>,
    pub brands: Option<String>,
    pub quantity: Option<String>,
    pub categories: Option<String>,
    pub packaging: Option<String>,
    /// The API serves `packaging_tags` as an array of tag strings on
    /// current responses and as a plain string on older ones. Keeping it as
    /// a `serde_json::Value` avoids parsing issues with either shape; the
    /// UI renders both.
    pub packaging_tags: Option<serde_json::Value>,
    pub labels: Option<String>,
    pub image_url: Option<String>,
}

/// Envelope returned by the search endpoint: a page of products plus the
/// total match count and paging position.
#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub page_size: i64,
}

impl ApiClient {
    /// Create an ApiClient configured from the environment variable
    /// `OPENFOODFACTS_URL` or fallback to the public production instance.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("OPENFOODFACTS_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client, base_url })
    }

    /// Fetch the raw JSON body for one barcode by GETting
    /// `/api/v0/product/<ean>.json`. The barcode is percent-encoded into
    /// the path. Any transport problem, including a non-success HTTP
    /// status, comes back as a single `Request failed` error.
    pub fn fetch_product(&self, ean: &str) -> Result<String> {
        let url = format!(
            "{}/api/v0/product/{}.json",
            self.base_url,
            urlencoding::encode(ean)
        );
        let res = self
            .client
            .get(&url)
            .send()
            .and_then(|res| res.error_for_status())
            .context("Request failed")?;
        // `text()` substitutes replacement characters for invalid bytes, so
        // a mangled body reaches JSON parsing instead of aborting here.
        res.text().context("Request failed")
    }

    /// Fetch one page of free-text search results from `/cgi/search.pl`.
    /// The query parameter set mirrors what the site's own clients send.
    pub fn fetch_search(&self, terms: &str, country: Option<&str>, page: u32) -> Result<String> {
        let url = format!("{}/cgi/search.pl", self.base_url);
        let mut req = self.client.get(&url).query(&[
            ("search_terms", terms),
            ("action", "process"),
            ("json", "1"),
        ]);
        if let Some(country) = country {
            req = req.query(&[("countries", country)]);
        }
        req = req.query(&[("page_size", SEARCH_PAGE_SIZE), ("page", page)]);
        let res = req
            .send()
            .and_then(|res| res.error_for_status())
            .context("Request failed")?;
        res.text().context("Request failed")
    }
}

/// Decode a product-endpoint body. Returns `(status, None)` when the API
/// reports anything other than found (status 1), with `status` defaulting
/// to 0 when the field is absent. On a found product, returns
/// `(0, Some(product))`, substituting the empty record when the envelope
/// carries no `product` member.
pub fn parse_product(raw: &str) -> Result<(i64, Option<Product>)> {
    let envelope: ProductResponse = serde_json::from_str(raw).context("Malformed API response")?;
    if envelope.status != 1 {
        return Ok((envelope.status, None));
    }
    Ok((0, Some(envelope.product.unwrap_or_default())))
}

/// Decode a search-endpoint body. The search endpoint has no status field;
/// an empty page is a valid response, not an error.
pub fn parse_search(raw: &str) -> Result<SearchResponse> {
    serde_json::from_str(raw).context("Malformed API response")
}

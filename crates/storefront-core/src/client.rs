//! Catalog retrieval client
//!
//! One `GET` to the catalog endpoint per call, no headers, no query
//! parameters, no auth. The caller decides when to fetch; this client does
//! no retrying, caching, or timeout enforcement of its own.

use crate::catalog::Product;
use crate::error::CatalogResult;

/// Production catalog endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// HTTP client for the remote product catalog.
///
/// Cheap to clone (the underlying `reqwest::Client` is reference-counted),
/// which is how the desktop app shares it through component context.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Create a client pointed at the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint URL this client fetches from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full product catalog.
    ///
    /// Returns the products in response order. Network failures and
    /// non-success statuses surface as [`CatalogError::Transport`], a body
    /// that is not a JSON product array as [`CatalogError::Parse`].
    ///
    /// [`CatalogError::Transport`]: crate::error::CatalogError::Transport
    /// [`CatalogError::Parse`]: crate::error::CatalogError::Parse
    pub async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        tracing::debug!("Fetching catalog from {}", self.endpoint);

        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        // Decode from text rather than `Response::json` so a bad body maps
        // to `Parse` instead of being swallowed into a reqwest error.
        let body = response.text().await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;

        tracing::debug!("Catalog fetched: {} products", products.len());
        Ok(products)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

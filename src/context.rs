//! Catalog client context provider for Storefront.
//!
//! Provides the CatalogClient instance to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| CatalogClient::new(get_catalog_endpoint()));
//!
//! // In child components
//! let client = use_catalog_client();
//! ```

use dioxus::prelude::*;
use storefront_core::CatalogClient;

/// Get the catalog endpoint for the application.
/// Uses the global endpoint set from command line args.
pub fn get_catalog_endpoint() -> String {
    crate::get_catalog_endpoint()
}

/// Hook to access the CatalogClient from context.
///
/// The client is cheap to clone, so components take their own copy.
///
/// # Example
///
/// ```ignore
/// let client = use_catalog_client();
/// let products = client.fetch_products().await?;
/// ```
pub fn use_catalog_client() -> CatalogClient {
    use_context::<CatalogClient>()
}

//! Storefront Core Library
//!
//! Product catalog model and retrieval client for the Storefront desktop app.
//!
//! ## Overview
//!
//! The core crate holds everything the UI does not: the `Product` shape
//! received from the remote catalog endpoint, the one-shot HTTP client that
//! fetches it, and the error types for a failed retrieval. The desktop crate
//! renders whatever this crate hands it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use storefront_core::CatalogClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::default();
//!
//!     for product in client.fetch_products().await? {
//!         println!("{} {} {}", product.title, product.price_label(), product.rating.stars());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod error;

// Re-exports
pub use catalog::{Product, Rating};
pub use client::{CatalogClient, DEFAULT_ENDPOINT};
pub use error::{CatalogError, CatalogResult};

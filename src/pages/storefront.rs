//! Storefront page - the product catalog grid.
//!
//! Owns the fetch lifecycle: one retrieval on mount, then loading, error,
//! or the card grid depending on how it settled.

use dioxus::prelude::*;
use storefront_core::Product;

use crate::components::ProductCard;
use crate::context::use_catalog_client;

/// Storefront page component.
///
/// Exactly one of the loading indicator, the error banner, or the grid is
/// the primary content at any time: loading until the fetch settles, then
/// the error banner if it failed, then the grid (possibly empty).
#[component]
pub fn Storefront() -> Element {
    let client = use_catalog_client();
    let mut products = use_signal(|| Vec::<Product>::new());
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    // Fetch once on mount. The task belongs to this component's scope, so
    // an unmount mid-flight drops it before it can write into the signals.
    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            match client.fetch_products().await {
                Ok(items) => {
                    tracing::info!("Catalog loaded: {} products", items.len());
                    products.set(items);
                }
                Err(e) => {
                    tracing::error!("Failed to fetch product catalog: {}", e);
                    error.set(Some("Failed to fetch products".to_string()));
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        main { class: "storefront",
            h1 { class: "page-title", "Storefront" }

            if loading() {
                div { class: "catalog-loading",
                    div { class: "loading-spinner" }
                    p { class: "catalog-loading__caption", "Loading products..." }
                }
            } else {
                if let Some(message) = error() {
                    p { class: "catalog-error", "{message}" }
                }

                // Rendered even when the error banner shows; empty in that
                // case since a failed fetch never populates the signal.
                div { class: "product-grid",
                    for product in products() {
                        ProductCard { key: "{product.id}", product }
                    }
                }
            }
        }
    }
}

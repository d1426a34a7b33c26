//! Product Card Component
//!
//! One catalog entry rendered as a card: image, category pill, title,
//! price, and star rating.

use dioxus::prelude::*;
use storefront_core::Product;

/// Product card component.
///
/// Pure render of a single product; no internal state, no side effects.
/// The category pill is capitalized in CSS only - the underlying value is
/// untouched. A broken image URL falls back to the webview's default
/// broken-image rendering.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     ProductCard {
///         key: "{product.id}",
///         product: product,
///     }
/// }
/// ```
#[component]
pub fn ProductCard(
    /// Catalog entry to render
    product: Product,
) -> Element {
    rsx! {
        div { class: "product-card",
            div { class: "product-card__image-area",
                img {
                    class: "product-card__image",
                    src: "{product.image}",
                    alt: "{product.title}",
                }
            }

            span { class: "product-card__category", "{product.category}" }

            h2 { class: "product-card__title", "{product.title}" }

            div { class: "product-card__footer",
                p { class: "product-card__price", {product.price_label()} }

                div { class: "product-card__rating",
                    span { class: "product-card__stars", {product.rating.stars()} }
                    span { class: "product-card__rating-count", "({product.rating.count})" }
                }
            }
        }
    }
}

//! UI components for Storefront.

mod product_card;

pub use product_card::ProductCard;

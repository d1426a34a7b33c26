//! Page components for Storefront.

mod storefront;

pub use storefront::Storefront;

//! Catalog types for Storefront
//!
//! The remote endpoint returns a JSON array of products; these types mirror
//! that shape exactly. Fields are stored verbatim - no validation, filtering,
//! or normalization happens on the way in.

use serde::{Deserialize, Serialize};

/// One entry in the product catalog
///
/// `id` is unique within a fetch response and is used as the rendering key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

impl Product {
    /// Price with the fixed currency prefix, numeric value as received.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

/// Aggregate customer rating for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

impl Rating {
    /// Number of star glyphs to render.
    ///
    /// `rate` is rounded to the nearest whole number (half rounds away from
    /// zero, so 3.5 becomes 4). A negative rate floors at zero glyphs; rates
    /// above 5 are not clamped and render that many glyphs.
    pub fn star_count(&self) -> usize {
        self.rate.round().max(0.0) as usize
    }

    /// The star glyph string shown on a card, e.g. "★★★★".
    pub fn stars(&self) -> String {
        "★".repeat(self.star_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rating(rate: f64) -> Rating {
        Rating { rate, count: 0 }
    }

    #[test]
    fn test_star_count_rounds_down_below_half() {
        assert_eq!(rating(3.4).star_count(), 3);
    }

    #[test]
    fn test_star_count_rounds_half_up() {
        assert_eq!(rating(3.5).star_count(), 4);
    }

    #[test]
    fn test_star_count_zero_rate() {
        assert_eq!(rating(0.0).star_count(), 0);
        assert_eq!(rating(0.0).stars(), "");
    }

    #[test]
    fn test_star_count_full_rate() {
        assert_eq!(rating(5.0).star_count(), 5);
        assert_eq!(rating(5.0).stars(), "★★★★★");
    }

    #[test]
    fn test_star_count_negative_rate_floors_at_zero() {
        assert_eq!(rating(-2.3).star_count(), 0);
    }

    #[test]
    fn test_star_count_above_five_is_not_clamped() {
        assert_eq!(rating(6.7).star_count(), 7);
    }

    #[test]
    fn test_stars_is_idempotent() {
        let r = rating(4.2);
        assert_eq!(r.stars(), r.stars());
    }

    #[test]
    fn test_price_label_keeps_value_as_received() {
        let mut product = sample_product();

        product.price = 109.95;
        assert_eq!(product.price_label(), "$109.95");

        // No decimal normalization: 22.3 stays 22.3
        product.price = 22.3;
        assert_eq!(product.price_label(), "$22.3");
    }

    #[test]
    fn test_product_deserializes_remote_shape() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://example.test/81fPKd-2AYL.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Fjallraven Backpack");
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.count, 120);
        assert_eq!(product.rating.star_count(), 4);
    }

    fn sample_product() -> Product {
        Product {
            id: 1,
            title: "Test Product".to_string(),
            price: 9.99,
            category: "electronics".to_string(),
            image: "https://example.test/p1.jpg".to_string(),
            rating: Rating { rate: 4.5, count: 10 },
        }
    }
}

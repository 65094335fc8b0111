//! Product records as served by the catalog API

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Largest quantity the detail view lets a shopper pick
pub const MAX_QUANTITY: u8 = 99;

/// A catalog entry. Never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Image URL (`image` on the wire)
    #[serde(rename = "image", default)]
    pub image_ref: String,
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// Aggregate customer rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0.0 to 5.0
    pub rate: f64,
    pub count: u32,
}

/// How one of the five rating stars is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

impl Product {
    /// Price formatted for display, e.g. `$109.95`
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Price of `quantity` units, e.g. `$219.90`
    pub fn total_label(&self, quantity: u8) -> String {
        format!("${:.2}", self.price * f64::from(quantity))
    }

    /// Rating score for display, `—` when the product is unrated
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(r) => format!("{}", r.rate),
            None => "—".to_string(),
        }
    }

    /// Stars for a listing card: whole points are full, a remainder of at
    /// least one half adds a half star.
    pub fn card_stars(&self) -> [StarFill; 5] {
        let rate = self.rating.map(|r| r.rate).unwrap_or(0.0);
        let full = rate.floor() as usize;
        let has_half = rate - rate.floor() >= 0.5;
        std::array::from_fn(|i| {
            if i < full {
                StarFill::Full
            } else if i == full && has_half {
                StarFill::Half
            } else {
                StarFill::Empty
            }
        })
    }

    /// Stars for the detail page: the rate rounded to the nearest whole star
    pub fn detail_stars(&self) -> [bool; 5] {
        let filled = self.rating.map(|r| r.rate.round() as usize).unwrap_or(0);
        std::array::from_fn(|i| i < filled)
    }
}

/// Decode a product collection from the catalog API's JSON array.
pub fn decode_collection(json: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    for product in &products {
        validate(product)?;
    }
    tracing::debug!(count = products.len(), "decoded product collection");
    Ok(products)
}

/// Decode a single product record.
pub fn decode_product(json: &str) -> Result<Product, CatalogError> {
    let product: Product = serde_json::from_str(json)?;
    validate(&product)?;
    Ok(product)
}

fn validate(product: &Product) -> Result<(), CatalogError> {
    if product.price < 0.0 {
        return Err(CatalogError::NegativePrice {
            id: product.id,
            price: product.price,
        });
    }
    if let Some(rating) = product.rating {
        if !(0.0..=5.0).contains(&rating.rate) {
            return Err(CatalogError::RatingOutOfRange {
                id: product.id,
                rate: rating.rate,
            });
        }
    }
    Ok(())
}

/// Uppercase the first character, e.g. `electronics` -> `Electronics`
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keep a quantity inside `1..=MAX_QUANTITY`
pub fn clamp_quantity(quantity: i32) -> u8 {
    quantity.clamp(1, MAX_QUANTITY as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(rate: f64) -> Product {
        Product {
            id: 1,
            title: "Backpack".to_string(),
            price: 109.95,
            category: "men's clothing".to_string(),
            description: String::new(),
            image_ref: String::new(),
            rating: Some(Rating { rate, count: 120 }),
        }
    }

    #[test]
    fn test_decode_api_shape() {
        let json = r#"[{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack",
            "category": "men's clothing",
            "image": "https://example.test/1.jpg",
            "rating": {"rate": 3.9, "count": 120}
        }, {
            "id": 2,
            "title": "Plain Tee",
            "price": 22.3,
            "category": "men's clothing"
        }]"#;
        let products = decode_collection(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].image_ref, "https://example.test/1.jpg");
        assert_eq!(products[0].rating.unwrap().count, 120);
        assert!(products[1].rating.is_none());
        assert_eq!(products[1].description, "");
    }

    #[test]
    fn test_decode_rejects_negative_price() {
        let json = r#"[{"id": 7, "title": "x", "price": -1.0, "category": "c"}]"#;
        assert!(matches!(
            decode_collection(json),
            Err(CatalogError::NegativePrice { id: 7, .. })
        ));
    }

    #[test]
    fn test_decode_rejects_rating_out_of_range() {
        let json = r#"{"id": 3, "title": "x", "price": 1.0, "category": "c",
                       "rating": {"rate": 5.5, "count": 1}}"#;
        assert!(matches!(
            decode_product(json),
            Err(CatalogError::RatingOutOfRange { id: 3, .. })
        ));
    }

    #[test]
    fn test_card_stars() {
        use StarFill::*;
        assert_eq!(rated(3.9).card_stars(), [Full, Full, Full, Half, Empty]);
        assert_eq!(rated(3.4).card_stars(), [Full, Full, Full, Empty, Empty]);
        assert_eq!(rated(5.0).card_stars(), [Full; 5]);
        let mut unrated = rated(0.0);
        unrated.rating = None;
        assert_eq!(unrated.card_stars(), [Empty; 5]);
        assert_eq!(unrated.rating_label(), "—");
    }

    #[test]
    fn test_detail_stars_round() {
        assert_eq!(rated(3.5).detail_stars(), [true, true, true, true, false]);
        assert_eq!(rated(2.4).detail_stars(), [true, true, false, false, false]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(rated(4.1).price_label(), "$109.95");
        assert_eq!(rated(4.1).rating_label(), "4.1");
        assert_eq!(rated(4.1).total_label(2), "$219.90");
        assert_eq!(capitalize_first("electronics"), "Electronics");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(42), 42);
        assert_eq!(clamp_quantity(150), 99);
    }
}

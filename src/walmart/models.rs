//! Data models for scraped records and normalized products.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One flat scraped listing, keyed by scraper-internal field names.
///
/// Kept as an untyped JSON object so it can be carried into the output
/// verbatim, key order included.
pub type Record = Map<String, Value>;

/// An alternate purchase option (pack size, color) linked from a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Link to the variant's product page
    pub url: Option<String>,
    /// Variant thumbnail
    pub image_url: Option<String>,
}

/// Normalized view of a single [`Record`].
///
/// Every typed field is either `None` or the result of a successful parse.
/// Serialized field order is the output schema; absent values become `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProduct {
    /// Product page URL
    pub url: Option<String>,
    /// Product title
    pub title: Option<String>,
    /// Brand name
    pub brand: Option<String>,
    /// Listing badge ("Meilleure vente", "Rollback", ...)
    pub badge: Option<String>,
    /// Main product image
    pub image_url: Option<String>,
    /// Current price
    pub price_current: Option<f64>,
    /// Price before discount
    pub price_original: Option<f64>,
    /// Advertised savings amount
    pub savings: Option<f64>,
    /// Star rating, nominally 0-5
    pub rating: Option<f64>,
    /// Number of reviews
    pub review_count: Option<u64>,
    pub delivery_text: Option<String>,
    pub delivery_eta: Option<String>,
    pub options_text: Option<String>,
    /// Up to `max_variants` alternate options, in slot order
    pub variants: Vec<Variant>,
    /// The source record, unmodified
    pub raw: Record,
}

impl NormalizedProduct {
    /// Returns true if both the URL and the title were recovered.
    pub fn has_core_fields(&self) -> bool {
        self.url.is_some() && self.title.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_test_product() -> NormalizedProduct {
        let raw = json!({"w-100 href": "https://www.walmart.ca/fr/ip/1", "normal": "Café moulu"});
        NormalizedProduct {
            url: Some("https://www.walmart.ca/fr/ip/1".to_string()),
            title: Some("Café moulu".to_string()),
            brand: None,
            badge: None,
            image_url: None,
            price_current: Some(9.99),
            price_original: None,
            savings: None,
            rating: Some(4.0),
            review_count: Some(12),
            delivery_text: None,
            delivery_eta: None,
            options_text: None,
            variants: vec![Variant { url: None, image_url: Some("https://i5/1.jpg".to_string()) }],
            raw: raw.as_object().cloned().unwrap(),
        }
    }

    #[test]
    fn test_has_core_fields() {
        let product = make_test_product();
        assert!(product.has_core_fields());

        let mut product = make_test_product();
        product.title = None;
        assert!(!product.has_core_fields());
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let value = serde_json::to_value(make_test_product()).unwrap();
        assert!(value["brand"].is_null());
        assert_eq!(value["price_current"], json!(9.99));
        assert_eq!(value["review_count"], json!(12));
        assert_eq!(value["variants"][0]["url"], Value::Null);
    }

    #[test]
    fn test_field_order_matches_schema() {
        let json = serde_json::to_string(&make_test_product()).unwrap();
        let positions: Vec<usize> = [
            "\"url\"",
            "\"title\"",
            "\"brand\"",
            "\"badge\"",
            "\"image_url\"",
            "\"price_current\"",
            "\"price_original\"",
            "\"savings\"",
            "\"rating\"",
            "\"review_count\"",
            "\"delivery_text\"",
            "\"delivery_eta\"",
            "\"options_text\"",
            "\"variants\"",
            "\"raw\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_non_ascii_is_literal() {
        let json = serde_json::to_string_pretty(&make_test_product()).unwrap();
        assert!(json.contains("Café moulu"));
        assert!(!json.contains("\\u00e9"));
    }
}

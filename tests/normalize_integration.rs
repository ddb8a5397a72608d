//! Integration tests for record normalization using fixture files.

use serde_json::{json, Value};
use walmart_normalizer::commands::NormalizeCommand;
use walmart_normalizer::{normalize_data, normalize_item, Config, Record};

const SAMPLE_FIXTURE: &str = include_str!("fixtures/walmart_sample.json");

fn sample_records() -> Vec<Record> {
    serde_json::from_str(SAMPLE_FIXTURE).unwrap()
}

#[test]
fn test_normalize_sample_export() {
    let records = sample_records();
    let products = normalize_data(&records);

    assert_eq!(products.len(), 3);

    // Fully populated listing
    let product = &products[0];
    assert_eq!(product.title.as_deref(), Some("Café moulu Original, 925 g"));
    assert_eq!(product.brand.as_deref(), Some("Maxwell House"));
    assert_eq!(product.badge.as_deref(), Some("Meilleure vente"));
    assert_eq!(product.price_current, Some(1234.50));
    assert_eq!(product.price_original, Some(1399.99));
    assert_eq!(product.savings, Some(165.49));
    assert_eq!(product.rating, Some(4.6));
    assert_eq!(product.review_count, Some(1287));
    assert_eq!(product.delivery_eta.as_deref(), Some("demain"));

    assert_eq!(product.variants.len(), 3);
    assert!(product.variants[0].url.as_deref().unwrap().ends_with("variant=1"));
    assert!(product.variants[1].url.as_deref().unwrap().ends_with("variant=2"));
    assert!(product.variants[2].url.is_none());
    assert!(product.variants[2].image_url.as_deref().unwrap().ends_with("v3.jpeg"));

    // Fallback title, garbled price, review count from the standalone field
    let product = &products[1];
    assert_eq!(product.title.as_deref(), Some("Lait 2 % Natrel, 4 L"));
    assert!(product.price_current.is_none());
    assert_eq!(product.rating, Some(4.0));
    assert_eq!(product.review_count, Some(57));
    assert!(product.delivery_eta.is_none());

    // Missing URL is passed through, not dropped
    let product = &products[2];
    assert!(product.url.is_none());
    assert!(product.rating.is_none());
    assert!(product.review_count.is_none());
    assert!(!product.has_core_fields());
}

#[test]
fn test_raw_is_preserved_verbatim() {
    let records = sample_records();
    let products = normalize_data(&records);

    for (product, record) in products.iter().zip(&records) {
        assert_eq!(&product.raw, record);
        let raw_keys: Vec<&String> = product.raw.keys().collect();
        let input_keys: Vec<&String> = record.keys().collect();
        assert_eq!(raw_keys, input_keys);
    }

    let output = serde_json::to_value(&products).unwrap();
    assert_eq!(output[1]["raw"]["b"], Value::Null);
}

#[test]
fn test_end_to_end_scenario() {
    let input = json!({
        "w-100 href": "http://x/p",
        "normal": "Widget",
        "mr1": "9,99 €",
        "w_q67L (4)": "4,0 sur 5 (12 avis)"
    });
    let record = input.as_object().cloned().unwrap();

    let output = serde_json::to_value(normalize_item(&record)).unwrap();
    assert_eq!(
        output,
        json!({
            "url": "http://x/p",
            "title": "Widget",
            "brand": null,
            "badge": null,
            "image_url": null,
            "price_current": 9.99,
            "price_original": null,
            "savings": null,
            "rating": 4.0,
            "review_count": 12,
            "delivery_text": null,
            "delivery_eta": null,
            "options_text": null,
            "variants": [],
            "raw": input
        })
    );
}

#[test]
fn test_command_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("walmart.json");
    let output = dir.path().join("walmart.normalized.json");
    std::fs::write(&input, SAMPLE_FIXTURE).unwrap();

    let config = Config { input, output: output.clone(), ..Config::default() };
    let summary = NormalizeCommand::new(config).execute().unwrap();

    assert_eq!(summary.count, 3);
    assert_eq!(summary.stats.records, 3);
    assert_eq!(summary.stats.variants, 3);
    assert_eq!(summary.stats.unparsed.get("price_current"), Some(&1));
    assert_eq!(summary.stats.unparsed.get("rating"), Some(&1));
    assert_eq!(summary.stats.unparsed.get("review_count"), None);
    assert_eq!(summary.stats.incomplete, 1);

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("Café moulu Original"));
    assert!(written.contains("\n  {\n    \"url\""));

    let value: Vec<Value> = serde_json::from_str(&written).unwrap();
    assert_eq!(value.len(), 3);
    assert_eq!(value[0]["review_count"], json!(1287));
    assert_eq!(value[2]["title"], json!("Produit sans données"));
}

//! Source keys for Walmart listing exports.
//!
//! The upstream scraper names every field after the CSS class it was pulled
//! from, so these keys are the de-facto input schema. All of them live here.
//!
//! **Update process**: when a fresh export stops lining up, diff its keys
//! against this table, update the defaults (or override them under `[fields]`
//! in `config.toml`), and add a record to the test fixture.

use serde::{Deserialize, Serialize};

/// Default number of numbered variant slots probed per record.
pub const MAX_VARIANTS: usize = 5;

/// Default source keys, in fallback-priority order.
pub mod keys {
    pub const URL: &[&str] = &["w-100 href"];

    pub const TITLE: &[&str] = &["normal", "w_q67L"];

    pub const BRAND: &[&str] = &["mb1"];

    /// "Best seller", "Rollback" and similar flags.
    pub const BADGE: &[&str] = &["w_SrYk"];

    pub const IMAGE_URL: &[&str] = &["absolute src"];

    pub const PRICE_CURRENT: &[&str] = &["mr1"];

    /// Struck-through price shown next to a discount.
    pub const PRICE_ORIGINAL: &[&str] = &["strike"];

    pub const SAVINGS: &[&str] = &["lh-copy"];

    /// Combined text like "4,5 sur 5 étoiles. 123 avis".
    pub const RATING_TEXT: &[&str] = &["w_q67L (4)"];

    /// Bare review count, only consulted when the rating text has none.
    pub const REVIEW_COUNT: &[&str] = &["sans-serif"];

    pub const DELIVERY_TEXT: &[&str] = &["ff-text-wrapper"];

    pub const DELIVERY_ETA: &[&str] = &["b"];

    pub const OPTIONS_TEXT: &[&str] = &["f7"];

    /// Variant link. Slots after the first carry a " (n)" suffix.
    pub const VARIANT_URL: &str = "z-2 href";

    /// Variant thumbnail, numbered like [`VARIANT_URL`].
    pub const VARIANT_IMAGE: &str = "br-100 src";
}

/// Mapping from output field to candidate source keys.
///
/// Each list is tried in order and the first key holding a non-empty string
/// wins. An empty list disables the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMap {
    pub url: Vec<String>,
    pub title: Vec<String>,
    pub brand: Vec<String>,
    pub badge: Vec<String>,
    pub image_url: Vec<String>,
    pub price_current: Vec<String>,
    pub price_original: Vec<String>,
    pub savings: Vec<String>,
    pub rating_text: Vec<String>,
    pub review_count: Vec<String>,
    pub delivery_text: Vec<String>,
    pub delivery_eta: Vec<String>,
    pub options_text: Vec<String>,
    pub variant_url: String,
    pub variant_image: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            url: owned(keys::URL),
            title: owned(keys::TITLE),
            brand: owned(keys::BRAND),
            badge: owned(keys::BADGE),
            image_url: owned(keys::IMAGE_URL),
            price_current: owned(keys::PRICE_CURRENT),
            price_original: owned(keys::PRICE_ORIGINAL),
            savings: owned(keys::SAVINGS),
            rating_text: owned(keys::RATING_TEXT),
            review_count: owned(keys::REVIEW_COUNT),
            delivery_text: owned(keys::DELIVERY_TEXT),
            delivery_eta: owned(keys::DELIVERY_ETA),
            options_text: owned(keys::OPTIONS_TEXT),
            variant_url: keys::VARIANT_URL.to_string(),
            variant_image: keys::VARIANT_IMAGE.to_string(),
        }
    }
}

impl FieldMap {
    /// Returns the (link, image) keys for a 1-based variant slot.
    ///
    /// Slot 1 uses the bare keys; slot `n > 1` appends `" (n)"`.
    pub fn variant_keys(&self, index: usize) -> (String, String) {
        (numbered(&self.variant_url, index), numbered(&self.variant_image, index))
    }
}

fn owned(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn numbered(key: &str, index: usize) -> String {
    if index <= 1 {
        key.to_string()
    } else {
        format!("{} ({})", key, index)
    }
}

//! walmart-normalizer - Normalize scraped Walmart listing exports
//!
//! Turns flat records keyed by scraper-internal CSS class names into typed
//! products with parsed prices, ratings, review counts, and variants.

pub mod commands;
pub mod config;
pub mod error;
pub mod walmart;

pub use config::Config;
pub use error::NormalizeError;
pub use walmart::models::{NormalizedProduct, Record, Variant};
pub use walmart::normalizer::{collect_variants, normalize_data, normalize_item};
pub use walmart::parser::{parse_decimal, parse_rating, parse_review_count};
pub use walmart::{FieldMap, NormalizeStats, Normalizer, MAX_VARIANTS};

//! Walmart-specific modules for source keys, parsing, and data models.

pub mod fields;
pub mod models;
pub mod normalizer;
pub mod parser;

pub use fields::{FieldMap, MAX_VARIANTS};
pub use models::{NormalizedProduct, Record, Variant};
pub use normalizer::{NormalizeStats, Normalizer};

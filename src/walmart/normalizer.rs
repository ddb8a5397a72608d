//! Record normalization from scraped keys to [`NormalizedProduct`].
//!
//! Text parsing is delegated to [`crate::walmart::parser`]; this module owns
//! the key lookups, the variant slots, and batch bookkeeping.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::walmart::fields::{FieldMap, MAX_VARIANTS};
use crate::walmart::models::{NormalizedProduct, Record, Variant};
use crate::walmart::parser::{mentions_reviews, parse_decimal, parse_rating, parse_review_count};

/// Converts scraped records into normalized products.
///
/// Normalization is pure and record-local: no I/O, no shared state, and a
/// field that fails to parse becomes `None` without touching its siblings.
#[derive(Debug, Clone)]
pub struct Normalizer {
    fields: FieldMap,
    max_variants: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(FieldMap::default(), MAX_VARIANTS)
    }
}

impl Normalizer {
    /// Creates a normalizer reading `fields` and probing up to
    /// `max_variants` variant slots.
    pub fn new(fields: FieldMap, max_variants: usize) -> Self {
        Self { fields, max_variants }
    }

    /// Returns the source-key mapping in use.
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Normalizes a single record.
    pub fn normalize_item(&self, record: &Record) -> NormalizedProduct {
        let fields = &self.fields;
        let rating_text = lookup(record, &fields.rating_text);

        NormalizedProduct {
            url: lookup_owned(record, &fields.url),
            title: lookup_owned(record, &fields.title),
            brand: lookup_owned(record, &fields.brand),
            badge: lookup_owned(record, &fields.badge),
            image_url: lookup_owned(record, &fields.image_url),
            price_current: parse_decimal(lookup(record, &fields.price_current)),
            price_original: parse_decimal(lookup(record, &fields.price_original)),
            savings: parse_decimal(lookup(record, &fields.savings)),
            rating: parse_rating(rating_text),
            review_count: parse_review_count(rating_text, lookup(record, &fields.review_count)),
            delivery_text: lookup_owned(record, &fields.delivery_text),
            delivery_eta: lookup_owned(record, &fields.delivery_eta),
            options_text: lookup_owned(record, &fields.options_text),
            variants: self.collect_variants(record),
            raw: record.clone(),
        }
    }

    /// Collects variants from slots `1..=max_variants`, in slot order.
    ///
    /// A slot yields a variant when its link or its image is non-empty; the
    /// stored values are the slot's strings as scraped. Slots past the bound
    /// are never read, even if the record has them.
    pub fn collect_variants(&self, record: &Record) -> Vec<Variant> {
        (1..=self.max_variants)
            .filter_map(|index| {
                let (url_key, image_key) = self.fields.variant_keys(index);

                if text(record, &url_key).is_none() && text(record, &image_key).is_none() {
                    return None;
                }

                Some(Variant {
                    url: raw_text(record, &url_key).map(String::from),
                    image_url: raw_text(record, &image_key).map(String::from),
                })
            })
            .collect()
    }

    /// Normalizes a batch, one product per record, in input order.
    pub fn normalize_data(&self, records: &[Record]) -> Vec<NormalizedProduct> {
        debug!("Normalizing {} records", records.len());

        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let product = self.normalize_item(record);
                trace!("Record {}: {:?}", index, product.title);
                product
            })
            .collect()
    }
}

/// Normalizes a record with the default Walmart key table.
pub fn normalize_item(record: &Record) -> NormalizedProduct {
    Normalizer::default().normalize_item(record)
}

/// Collects variants with the default Walmart key table.
pub fn collect_variants(record: &Record) -> Vec<Variant> {
    Normalizer::default().collect_variants(record)
}

/// Normalizes a batch with the default Walmart key table.
pub fn normalize_data(records: &[Record]) -> Vec<NormalizedProduct> {
    Normalizer::default().normalize_data(records)
}

/// Parse diagnostics for a normalized batch.
///
/// The output schema collapses "missing" and "present but unparseable" into
/// `null`; these counters keep the second case visible per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Records normalized
    pub records: usize,
    /// Records missing a URL or a title
    pub incomplete: usize,
    /// Variants emitted across all records
    pub variants: usize,
    /// Records whose source text for a field was present but did not parse
    pub unparsed: BTreeMap<&'static str, usize>,
}

impl NormalizeStats {
    /// Builds stats for `products`, re-reading each embedded `raw` record.
    pub fn collect(products: &[NormalizedProduct], fields: &FieldMap) -> Self {
        let mut stats = Self::default();
        for product in products {
            stats.record(product, fields);
        }
        stats
    }

    /// Adds one product to the stats.
    pub fn record(&mut self, product: &NormalizedProduct, fields: &FieldMap) {
        self.records += 1;
        self.variants += product.variants.len();
        if !product.has_core_fields() {
            self.incomplete += 1;
        }

        let raw = &product.raw;
        let rating_text = lookup(raw, &fields.rating_text);

        // A rating text without "N avis" carries no count; only a rejected
        // fallback or an overflowing "N avis" is a failed parse.
        let review_attempted = rating_text.is_some_and(mentions_reviews)
            || lookup(raw, &fields.review_count).is_some();

        let checks = [
            (
                "price_current",
                lookup(raw, &fields.price_current).is_some(),
                product.price_current.is_some(),
            ),
            (
                "price_original",
                lookup(raw, &fields.price_original).is_some(),
                product.price_original.is_some(),
            ),
            ("savings", lookup(raw, &fields.savings).is_some(), product.savings.is_some()),
            ("rating", rating_text.is_some(), product.rating.is_some()),
            ("review_count", review_attempted, product.review_count.is_some()),
        ];

        for (field, present, parsed) in checks {
            if present && !parsed {
                *self.unparsed.entry(field).or_default() += 1;
            }
        }
    }

    /// Total unparsed fields across all records.
    pub fn unparsed_total(&self) -> usize {
        self.unparsed.values().sum()
    }
}

/// Returns the string under `key`, empty or not.
fn raw_text<'a>(record: &'a Record, key: &str) -> Option<&'a str> {
    record.get(key)?.as_str()
}

/// Returns the value under `key` if it is a non-empty string.
fn text<'a>(record: &'a Record, key: &str) -> Option<&'a str> {
    raw_text(record, key).filter(|s| !s.is_empty())
}

/// Returns the first non-empty string among `candidates`.
fn lookup<'a>(record: &'a Record, candidates: &[String]) -> Option<&'a str> {
    candidates.iter().find_map(|key| text(record, key))
}

/// Projects a string field: the first non-empty candidate, otherwise the
/// last candidate's value as scraped. A single-key field is copied verbatim.
fn lookup_owned(record: &Record, candidates: &[String]) -> Option<String> {
    lookup(record, candidates)
        .or_else(|| raw_text(record, candidates.last()?))
        .map(String::from)
}

//! Tolerant parsers for French-locale listing text.
//!
//! Every function here returns `None` when it cannot make sense of its input
//! and never panics. Scraped text is noisy; one bad price must leave the rest
//! of the record intact, so keep these returning `Option` rather than `Result`.

use regex_lite::Regex;
use std::sync::LazyLock;

/// First decimal-looking token. Thousands may be grouped with ASCII, no-break
/// or narrow no-break spaces.
static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d\s\x{A0}\x{202F}]*[,.]\d+").unwrap());

/// "4,5 sur 5", any case.
static RATING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([\d.,]+)\s*sur\s*5").unwrap());

/// "123 avis", any case.
static REVIEWS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*avis").unwrap());

/// Extracts the first decimal number from text like "1 234,50 $".
///
/// Only the first token counts: "12,99 € (économisez 3,00 €)" is 12.99.
/// Whole numbers without a decimal part are not recognized.
pub fn parse_decimal(text: Option<&str>) -> Option<f64> {
    let text = text.filter(|t| !t.is_empty())?;
    let token = DECIMAL.find(text)?.as_str();

    let normalized: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    normalized.parse().ok()
}

/// Extracts a star rating from text like "4,5 sur 5 étoiles".
pub fn parse_rating(text: Option<&str>) -> Option<f64> {
    let text = text.filter(|t| !t.is_empty())?;
    let captures = RATING.captures(text)?;

    captures.get(1)?.as_str().replace(',', ".").parse().ok()
}

/// Extracts a review count, first from "N avis" in `text`, then from a
/// `fallback` made only of ASCII digits.
///
/// The fallback is consulted only when `text` has no "N avis" match.
pub fn parse_review_count(text: Option<&str>, fallback: Option<&str>) -> Option<u64> {
    if let Some(captures) = text.and_then(|t| REVIEWS.captures(t)) {
        return captures.get(1)?.as_str().parse().ok();
    }

    let fallback = fallback.filter(|f| !f.is_empty() && f.chars().all(|c| c.is_ascii_digit()))?;
    fallback.parse().ok()
}

/// Returns true if `text` carries an "N avis" review phrase.
pub(crate) fn mentions_reviews(text: &str) -> bool {
    REVIEWS.is_match(text)
}

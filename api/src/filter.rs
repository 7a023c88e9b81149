//! Pure filters over the loaded collection.
//!
//! Results borrow from the collection and keep its order. In the two
//! independent filters an empty query yields nothing: "no query yet" and
//! "matched nothing" are the same thing there.

use crate::country::CountryRecord;
use crate::region::Region;

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn matches_text(record: &CountryRecord, query_lower: &str) -> bool {
    contains_ignore_case(record.name(), query_lower)
        || record
            .capital()
            .is_some_and(|capital| contains_ignore_case(capital, query_lower))
}

fn matches_region(record: &CountryRecord, query_lower: &str) -> bool {
    contains_ignore_case(record.region(), query_lower)
}

/// Records whose common name or first capital contains `query`, ignoring case.
pub fn filter_by_text<'a>(collection: &'a [CountryRecord], query: &str) -> Vec<&'a CountryRecord> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    collection
        .iter()
        .filter(|record| matches_text(record, &query))
        .collect()
}

/// Records whose region contains `query`, ignoring case.
pub fn filter_by_region<'a>(
    collection: &'a [CountryRecord],
    query: &str,
) -> Vec<&'a CountryRecord> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    collection
        .iter()
        .filter(|record| matches_region(record, &query))
        .collect()
}

/// Single predicate used by the unified layout.
///
/// An empty text query puts no constraint on name/capital; an empty or `All`
/// region query puts no constraint on region. Both constraints must hold.
pub fn filter_combined<'a>(
    collection: &'a [CountryRecord],
    text: &str,
    region: &str,
) -> Vec<&'a CountryRecord> {
    let text = text.to_lowercase();
    let region = if region.eq_ignore_ascii_case(Region::All.value()) {
        String::new()
    } else {
        region.to_lowercase()
    };

    collection
        .iter()
        .filter(|record| text.is_empty() || matches_text(record, &text))
        .filter(|record| region.is_empty() || matches_region(record, &region))
        .collect()
}

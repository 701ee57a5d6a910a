//! Denylist and description-length filtering.
//!
//! Matching is plain, case-sensitive substring search. That means a short
//! term such as `tv` also matches inside longer words; narrow the
//! [`MatchScope`] or the denylist itself if that bites.

use hidbook_core::{BookRecord, CurationRules, MatchScope};

/// Returns the denylist term that disqualifies `record`, if any.
#[must_use]
pub fn denylist_hit<'r>(record: &BookRecord, rules: &'r CurationRules) -> Option<&'r str> {
    let haystack = match rules.match_scope {
        MatchScope::Title => record.title.clone(),
        MatchScope::TitleAndDescription => format!("{}{}", record.title, record.description),
    };
    rules
        .denylist
        .iter()
        .map(String::as_str)
        .find(|term| haystack.contains(*term))
}

#[must_use]
pub fn is_overexposed(record: &BookRecord, rules: &CurationRules) -> bool {
    denylist_hit(record, rules).is_some()
}

#[must_use]
pub fn has_enough_description(record: &BookRecord, rules: &CurationRules) -> bool {
    record.description_chars() >= rules.min_description_chars
}

/// Keeps presentable records that pass both the denylist and the length
/// check, in their original order.
#[must_use]
pub fn filter_records(records: &[BookRecord], rules: &CurationRules) -> Vec<BookRecord> {
    records
        .iter()
        .filter(|record| {
            if !record.is_presentable() {
                return false;
            }
            if let Some(term) = denylist_hit(record, rules) {
                tracing::debug!(title = %record.title, term, "dropped overexposed record");
                return false;
            }
            if !has_enough_description(record, rules) {
                tracing::debug!(
                    title = %record.title,
                    chars = record.description_chars(),
                    "dropped record with short description"
                );
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

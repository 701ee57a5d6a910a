//! "Hidden gem" score: keyword density in the description plus a bonus for
//! books few people have reviewed.

use hidbook_core::{BookRecord, CurationRules};

/// Scores a record against the curation rules.
///
/// Each density keyword counts once, however often it appears. A missing
/// review count is treated as zero reviews.
#[must_use]
pub fn score_record(record: &BookRecord, rules: &CurationRules) -> i32 {
    let density: i32 = rules
        .density_keywords
        .iter()
        .filter(|kw| record.description.contains(kw.keyword.as_str()))
        .map(|kw| kw.weight)
        .sum();

    let reviews = record.review_count.unwrap_or(0);
    let bonus = if reviews < rules.review_bonus_threshold {
        rules.review_bonus
    } else {
        0
    };

    density.saturating_add(bonus)
}

/// Returns a copy of `record` with its `score` filled in.
#[must_use]
pub fn with_score(record: &BookRecord, rules: &CurationRules) -> BookRecord {
    BookRecord {
        score: Some(score_record(record, rules)),
        ..record.clone()
    }
}

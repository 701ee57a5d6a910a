//! The short blurb shown under a recommendation.

use hidbook_core::{BookRecord, Mood};
use rand::Rng;

const FOCUS_PLACEHOLDER: &str = "{focus}";
const FOCUS_MAX_CHARS: usize = 40;

/// Picks a reason template from the mood's pool with `rng` and fills in the
/// record's focus phrase.
///
/// Templates that need a focus phrase fall back to the mood's first template
/// when the description yields none.
#[must_use]
pub fn make_reason<R: Rng + ?Sized>(mood: Mood, record: &BookRecord, rng: &mut R) -> String {
    let pool = mood.reason_pool();
    let template = pool[rng.random_range(0..pool.len())];

    if !template.contains(FOCUS_PLACEHOLDER) {
        return template.to_string();
    }

    match focus_phrase(&record.description) {
        Some(focus) => template.replace(FOCUS_PLACEHOLDER, &focus),
        None => pool[0].to_string(),
    }
}

/// First sentence of the description, capped at 40 characters with an
/// ellipsis. `None` for a blank description.
#[must_use]
pub fn focus_phrase(description: &str) -> Option<String> {
    let first = description
        .split_inclusive(['.', '!', '?', '。'])
        .next()
        .unwrap_or_default()
        .trim()
        .trim_end_matches(['.', '!', '?', '。']);
    if first.is_empty() {
        return None;
    }

    if first.chars().count() <= FOCUS_MAX_CHARS {
        return Some(first.to_string());
    }

    let cut: String = first.chars().take(FOCUS_MAX_CHARS).collect();
    Some(format!("{}…", cut.trim_end()))
}

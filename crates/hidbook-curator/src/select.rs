//! Picking one record from a candidate pool.
//!
//! All randomness comes from the caller's RNG, so a seeded generator makes
//! every pick reproducible.

use hidbook_core::{BookRecord, CurationRules, SelectionPolicy};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::scorer::with_score;

/// Picks one record from an already-filtered pool according to `policy`.
///
/// Returns `None` when the pool is empty or, under
/// [`SelectionPolicy::Scored`], when nothing reaches `rules.min_score`.
/// The returned record always has its `score` filled in.
#[must_use]
pub fn select<R: Rng + ?Sized>(
    pool: &[BookRecord],
    policy: SelectionPolicy,
    rules: &CurationRules,
    rng: &mut R,
) -> Option<BookRecord> {
    match policy {
        SelectionPolicy::Scored => select_scored(pool, rules, rng),
        SelectionPolicy::Seeded => choose_uniform(pool, rng).map(|r| with_score(r, rules)),
    }
}

/// Sorts by score (stable, descending), keeps the top `rules.top_k`, and
/// breaks ties at the top score with `rng`.
fn select_scored<R: Rng + ?Sized>(
    pool: &[BookRecord],
    rules: &CurationRules,
    rng: &mut R,
) -> Option<BookRecord> {
    let mut scored: Vec<BookRecord> = pool
        .iter()
        .map(|r| with_score(r, rules))
        .filter(|r| r.score.unwrap_or_default() >= rules.min_score)
        .collect();
    scored.sort_by_key(|r| std::cmp::Reverse(r.score));
    scored.truncate(rules.top_k.max(1));

    let best = scored.first()?.score;
    let tied: Vec<&BookRecord> = scored.iter().take_while(|r| r.score == best).collect();
    tied.choose(rng).map(|r| (*r).clone())
}

/// Uniform choice over the pool.
pub fn choose_uniform<'a, R: Rng + ?Sized>(
    pool: &'a [BookRecord],
    rng: &mut R,
) -> Option<&'a BookRecord> {
    pool.choose(rng)
}

/// The pool used when nothing survives filtering: every presentable record
/// that was fetched, unfiltered, in fetch order.
#[must_use]
pub fn fallback_pool(raw: &[BookRecord]) -> Vec<BookRecord> {
    raw.iter().filter(|r| r.is_presentable()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seeded_rng;

    fn rules() -> CurationRules {
        CurationRules::default()
    }

    fn book(title: &str, description: &str, reviews: Option<u32>) -> BookRecord {
        BookRecord {
            review_count: reviews,
            ..BookRecord::new(title, description)
        }
    }

    #[test]
    fn empty_pool_selects_nothing() {
        let mut rng = seeded_rng("k");
        assert!(select(&[], SelectionPolicy::Seeded, &rules(), &mut rng).is_none());
        assert!(select(&[], SelectionPolicy::Scored, &rules(), &mut rng).is_none());
    }

    #[test]
    fn seeded_selection_is_idempotent_for_a_key() {
        let pool: Vec<BookRecord> = (0..7).map(|i| book(&format!("책 {i}"), "", None)).collect();
        let first = select(
            &pool,
            SelectionPolicy::Seeded,
            &rules(),
            &mut seeded_rng("2024-01-01생각이 깊어지는 책0"),
        )
        .unwrap();
        for _ in 0..10 {
            let again = select(
                &pool,
                SelectionPolicy::Seeded,
                &rules(),
                &mut seeded_rng("2024-01-01생각이 깊어지는 책0"),
            )
            .unwrap();
            assert_eq!(again.title, first.title);
        }
    }

    #[test]
    fn seeded_selection_reaches_every_record_across_keys() {
        let pool: Vec<BookRecord> = (0..3).map(|i| book(&format!("책 {i}"), "", None)).collect();
        let mut seen = std::collections::HashSet::new();
        for retry in 0..200 {
            let mut rng = seeded_rng(&format!("2024-01-01생각이 깊어지는 책{retry}"));
            let pick = select(&pool, SelectionPolicy::Seeded, &rules(), &mut rng).unwrap();
            seen.insert(pick.title);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn seeded_selection_fills_in_score() {
        let pool = vec![book("책", "사유", Some(1))];
        let pick = select(&pool, SelectionPolicy::Seeded, &rules(), &mut seeded_rng("k")).unwrap();
        assert_eq!(pick.score, Some(5));
    }

    #[test]
    fn scored_selection_takes_highest_score() {
        let pool = vec![
            book("보통", "사유 태도", None),              // 7
            book("최고", "사유 문장 태도 관점", Some(10)), // 12
            book("중간", "사유 문장", None),              // 8
        ];
        let pick = select(&pool, SelectionPolicy::Scored, &rules(), &mut seeded_rng("k")).unwrap();
        assert_eq!(pick.title, "최고");
        assert_eq!(pick.score, Some(12));
    }

    #[test]
    fn scored_selection_drops_records_below_min_score() {
        let pool = vec![book("낮음", "일상", None)];
        assert!(select(&pool, SelectionPolicy::Scored, &rules(), &mut seeded_rng("k")).is_none());
    }

    #[test]
    fn scored_ties_are_broken_by_rng_deterministically() {
        let pool = vec![
            book("가", "사유 문장", None),
            book("나", "사유 문장", None),
            book("다", "사유 문장", None),
            book("라", "사유", None),
        ];
        let pick = |key: &str| {
            select(&pool, SelectionPolicy::Scored, &rules(), &mut seeded_rng(key))
                .unwrap()
                .title
        };
        let first = pick("tie");
        assert_ne!(first, "라");
        assert_eq!(pick("tie"), first);

        let mut seen = std::collections::HashSet::new();
        for i in 0..100 {
            seen.insert(pick(&format!("tie{i}")));
        }
        assert_eq!(seen.len(), 3, "every tied record should be reachable");
    }

    #[test]
    fn scored_selection_respects_top_k() {
        let mut rules = rules();
        rules.min_score = 0;
        rules.top_k = 1;
        let pool = vec![book("가", "사유", None), book("나", "사유", None)];
        // top_k = 1 leaves only the first of the tied records (stable sort).
        for i in 0..20 {
            let pick = select(&pool, SelectionPolicy::Scored, &rules, &mut seeded_rng(&i.to_string()))
                .unwrap();
            assert_eq!(pick.title, "가");
        }
    }

    #[test]
    fn fallback_pool_equals_presentable_input() {
        let raw = vec![
            book("베스트셀러", "", None),
            book("", "제목 없음", None),
            book("힐링", "짧음", None),
        ];
        let pool = fallback_pool(&raw);
        assert_eq!(pool, vec![raw[0].clone(), raw[2].clone()]);
    }
}

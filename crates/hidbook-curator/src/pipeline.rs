//! One recommendation pass: keywords → fetch → filter → select → reason.

use std::collections::HashSet;
use std::time::Duration;

use hidbook_core::{BookRecord, CurationRules, Mood, SelectionContext, SelectionPolicy};
use hidbook_scraper::{BookSource, ScraperError};
use serde::Serialize;

use crate::error::CurateError;
use crate::filter::filter_records;
use crate::reason::make_reason;
use crate::scorer::with_score;
use crate::seed::seeded_rng;
use crate::select::{choose_uniform, fallback_pool, select};

/// Knobs for a [`Curator`], usually derived from `AppConfig`.
#[derive(Debug, Clone)]
pub struct CuratorSettings {
    pub policy: SelectionPolicy,
    pub rules: CurationRules,
    /// Pause between consecutive keywords, never before the first.
    pub inter_keyword_delay: Duration,
    /// Pages fetched per keyword; fetching stops early at an empty page.
    pub max_pages: u32,
}

impl Default for CuratorSettings {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::Seeded,
            rules: CurationRules::default(),
            inter_keyword_delay: Duration::from_millis(500),
            max_pages: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub record: BookRecord,
    pub reason: String,
    pub mood: Mood,
    /// Keyword whose results produced the pick; `None` for a fallback pick.
    pub keyword: Option<String>,
    pub seed_key: String,
    /// Set when nothing survived filtering and the pick came from the
    /// unfiltered results.
    pub fallback: bool,
    pub source: &'static str,
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Found(Box<Recommendation>),
    /// Every keyword was tried and there was nothing to show, not even
    /// unfiltered. Not an error; the user can retry or switch mood.
    NotFound,
}

pub struct Curator<S> {
    source: S,
    settings: CuratorSettings,
}

impl<S: BookSource> Curator<S> {
    #[must_use]
    pub fn new(source: S, settings: CuratorSettings) -> Self {
        Self { source, settings }
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs one recommendation pass for `ctx`.
    ///
    /// Keywords are tried in order. A failed fetch is logged and the keyword
    /// is skipped. The first keyword whose filtered results yield a pick
    /// wins. If none does, the pick falls back to a seeded choice over all
    /// unfiltered presentable results.
    ///
    /// # Errors
    ///
    /// Returns [`CurateError::SourceUnavailable`] only when every fetch
    /// attempt failed.
    pub async fn recommend(&self, ctx: &SelectionContext) -> Result<Outcome, CurateError> {
        let seed_key = ctx.seed_key();
        let mut pick_rng = seeded_rng(&seed_key);
        let mut reason_rng = seeded_rng(&format!("{seed_key}:reason"));
        let settings = &self.settings;

        let mut collected: Vec<BookRecord> = Vec::new();
        let mut seen_titles: HashSet<String> = HashSet::new();
        let mut attempts = 0u32;
        let mut failures = 0u32;
        let mut last_error: Option<ScraperError> = None;

        for (index, keyword) in ctx.mood.keywords().iter().enumerate() {
            if index > 0 && !settings.inter_keyword_delay.is_zero() {
                tokio::time::sleep(settings.inter_keyword_delay).await;
            }

            let mut keyword_records = Vec::new();
            for page in 1..=settings.max_pages.max(1) {
                attempts += 1;
                match self.source.search(keyword, page).await {
                    Ok(records) => {
                        let exhausted = records.is_empty();
                        keyword_records.extend(records);
                        if exhausted {
                            break;
                        }
                    }
                    Err(err) => {
                        failures += 1;
                        tracing::warn!(
                            source = self.source.name(),
                            keyword,
                            page,
                            error = %err,
                            "search failed; moving on"
                        );
                        last_error = Some(err);
                        break;
                    }
                }
            }

            for record in &keyword_records {
                if seen_titles.insert(record.title.clone()) {
                    collected.push(record.clone());
                }
            }

            let candidates = filter_records(&keyword_records, &settings.rules);
            tracing::debug!(
                keyword,
                fetched = keyword_records.len(),
                candidates = candidates.len(),
                "filtered keyword results"
            );

            if let Some(record) =
                select(&candidates, settings.policy, &settings.rules, &mut pick_rng)
            {
                tracing::info!(title = %record.title, keyword, seed_key = %seed_key, "picked book");
                let reason = make_reason(ctx.mood, &record, &mut reason_rng);
                return Ok(Outcome::Found(Box::new(Recommendation {
                    record,
                    reason,
                    mood: ctx.mood,
                    keyword: Some((*keyword).to_string()),
                    seed_key,
                    fallback: false,
                    source: self.source.name(),
                })));
            }
        }

        if failures == attempts {
            if let Some(last) = last_error {
                return Err(CurateError::SourceUnavailable {
                    source_name: self.source.name(),
                    attempts,
                    last,
                });
            }
        }

        let pool = fallback_pool(&collected);
        let Some(record) = choose_uniform(&pool, &mut pick_rng) else {
            tracing::info!(mood = ctx.mood.slug(), "no records to recommend");
            return Ok(Outcome::NotFound);
        };
        let record = with_score(record, &settings.rules);

        tracing::info!(
            title = %record.title,
            pool = pool.len(),
            seed_key = %seed_key,
            "nothing survived filtering; picked from unfiltered results"
        );
        let reason = make_reason(ctx.mood, &record, &mut reason_rng);
        Ok(Outcome::Found(Box::new(Recommendation {
            record,
            reason,
            mood: ctx.mood,
            keyword: None,
            seed_key,
            fallback: true,
            source: self.source.name(),
        })))
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;

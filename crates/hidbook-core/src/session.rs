//! Session-scoped state and the per-request selection context.

use chrono::NaiveDate;

use crate::Mood;

/// The only state that outlives a single request: how many times the user
/// has asked for "another one" since the last fresh search.
///
/// Owned by the front end and passed explicitly into [`SelectionContext::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionContext {
    retry_count: u32,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session as if `retry_count` retries had already happened.
    #[must_use]
    pub fn with_retry_count(retry_count: u32) -> Self {
        Self { retry_count }
    }

    #[must_use]
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// Records a "retry" action. Returns the new count.
    pub fn retry(&mut self) -> u32 {
        self.retry_count = self.retry_count.saturating_add(1);
        self.retry_count
    }

    /// Records a "new search" action, resetting the retry count to zero.
    pub fn new_search(&mut self) {
        self.retry_count = 0;
    }
}

/// Everything that determines which book is picked for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionContext {
    pub date: NaiveDate,
    pub mood: Mood,
    pub retry_count: u32,
}

impl SelectionContext {
    #[must_use]
    pub fn new(date: NaiveDate, mood: Mood, session: &SessionContext) -> Self {
        Self {
            date,
            mood,
            retry_count: session.retry_count(),
        }
    }

    /// Composite key hashed into the RNG seed: date, mood label, retry count,
    /// concatenated without separators (e.g. `2024-01-01생각이 깊어지는 책0`).
    #[must_use]
    pub fn seed_key(&self) -> String {
        format!(
            "{}{}{}",
            self.date.format("%Y-%m-%d"),
            self.mood.label(),
            self.retry_count
        )
    }
}

use serde::{Deserialize, Serialize};

/// A single search result from a bookstore source.
///
/// Records are created fresh per request and discarded after rendering. The
/// title is the only identity a record has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub description: String,
    /// Review count as shown by the source, when it exposes one.
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    /// Filled in by the selector; sources always leave it `None`.
    #[serde(default)]
    pub score: Option<i32>,
}

impl BookRecord {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            review_count: None,
            link: None,
            cover_url: None,
            score: None,
        }
    }

    /// A record may only be shown to the user when it has a non-blank title.
    #[must_use]
    pub fn is_presentable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Description length in characters, not bytes. Korean text is three
    /// bytes per syllable in UTF-8.
    #[must_use]
    pub fn description_chars(&self) -> usize {
        self.description.chars().count()
    }
}

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which bookstore backend the source client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Kyobo search results page, scraped as HTML.
    Kyobo,
    /// Aladin TTB `ItemSearch` JSON API. Requires an API key.
    Aladin,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Kyobo => write!(f, "kyobo"),
            SourceKind::Aladin => write!(f, "aladin"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Keyword-density score, top-K, seeded tie break.
    Scored,
    /// Seeded uniform choice over the filtered pool.
    Seeded,
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionPolicy::Scored => write!(f, "scored"),
            SelectionPolicy::Seeded => write!(f, "seeded"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub source: SourceKind,
    pub selection_policy: SelectionPolicy,
    pub kyobo_base_url: String,
    pub aladin_base_url: String,
    pub aladin_api_key: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub inter_keyword_delay_ms: u64,
    pub max_results: u32,
    pub max_pages: u32,
    pub curation_path: Option<PathBuf>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("source", &self.source)
            .field("selection_policy", &self.selection_policy)
            .field("kyobo_base_url", &self.kyobo_base_url)
            .field("aladin_base_url", &self.aladin_base_url)
            .field(
                "aladin_api_key",
                &self.aladin_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("inter_keyword_delay_ms", &self.inter_keyword_delay_ms)
            .field("max_results", &self.max_results)
            .field("max_pages", &self.max_pages)
            .field("curation_path", &self.curation_path)
            .finish()
    }
}

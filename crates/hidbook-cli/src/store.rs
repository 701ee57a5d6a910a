//! Wiring from `AppConfig` to a ready-to-run `Curator`.

use std::time::Duration;

use hidbook_core::{
    load_curation, AppConfig, BookRecord, CurationRules, SelectionPolicy, SourceKind,
};
use hidbook_curator::{Curator, CuratorSettings};
use hidbook_scraper::{AladinClient, BookSource, KyoboClient, ScraperError};

/// The configured bookstore, chosen at start-up.
pub(crate) enum StoreClient {
    Kyobo(KyoboClient),
    Aladin(AladinClient),
}

impl BookSource for StoreClient {
    fn name(&self) -> &'static str {
        match self {
            StoreClient::Kyobo(client) => client.name(),
            StoreClient::Aladin(client) => client.name(),
        }
    }

    async fn search(&self, keyword: &str, page: u32) -> Result<Vec<BookRecord>, ScraperError> {
        match self {
            StoreClient::Kyobo(client) => client.search(keyword, page).await,
            StoreClient::Aladin(client) => client.search(keyword, page).await,
        }
    }
}

/// Builds the source client for `kind` from the configured URLs and limits.
///
/// # Errors
///
/// Returns an error if the Aladin API key is missing or a client cannot be
/// built.
pub(crate) fn build_store(config: &AppConfig, kind: SourceKind) -> anyhow::Result<StoreClient> {
    let timeout = config.request_timeout_secs;
    let user_agent = config.user_agent.as_str();

    match kind {
        SourceKind::Kyobo => {
            let max_items = usize::try_from(config.max_results).unwrap_or(usize::MAX);
            let client = KyoboClient::with_base_url(
                timeout,
                user_agent,
                max_items,
                &config.kyobo_base_url,
            )
            .map_err(|e| anyhow::anyhow!("failed to build Kyobo client: {e}"))?;
            Ok(StoreClient::Kyobo(client))
        }
        SourceKind::Aladin => {
            let api_key = config.aladin_api_key.as_deref().ok_or_else(|| {
                anyhow::anyhow!("HIDBOOK_ALADIN_API_KEY is not set; cannot search Aladin")
            })?;
            let client = AladinClient::with_base_url(
                api_key,
                timeout,
                user_agent,
                config.max_results,
                &config.aladin_base_url,
            )
            .map_err(|e| anyhow::anyhow!("failed to build Aladin client: {e}"))?;
            Ok(StoreClient::Aladin(client))
        }
    }
}

/// Loads curation rules from `HIDBOOK_CURATION_PATH`, or the built-in rules
/// when it is unset.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub(crate) fn curation_rules(config: &AppConfig) -> anyhow::Result<CurationRules> {
    match &config.curation_path {
        Some(path) => {
            let rules = load_curation(path)?;
            tracing::debug!(path = %path.display(), "loaded curation rules");
            Ok(rules)
        }
        None => Ok(CurationRules::default()),
    }
}

/// Builds a curator, letting command-line flags override the configured
/// source and selection policy.
///
/// # Errors
///
/// Propagates client construction and curation loading failures.
pub(crate) fn build_curator(
    config: &AppConfig,
    source: Option<SourceKind>,
    policy: Option<SelectionPolicy>,
) -> anyhow::Result<Curator<StoreClient>> {
    let store = build_store(config, source.unwrap_or(config.source))?;
    let settings = CuratorSettings {
        policy: policy.unwrap_or(config.selection_policy),
        rules: curation_rules(config)?,
        inter_keyword_delay: Duration::from_millis(config.inter_keyword_delay_ms),
        max_pages: config.max_pages,
    };
    tracing::debug!(
        source = store.name(),
        policy = %settings.policy,
        "curator ready"
    );
    Ok(Curator::new(store, settings))
}

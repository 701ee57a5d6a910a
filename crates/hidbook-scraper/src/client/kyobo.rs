use hidbook_core::BookRecord;
use reqwest::{Client, Url};

use super::{build_http_client, check_status, endpoint_url, parse_base_url};
use crate::error::ScraperError;
use crate::parse::extract_books;
use crate::source::BookSource;

const DEFAULT_BASE_URL: &str = "https://search.kyobobook.co.kr";

/// Scrapes the Kyobo search results page.
///
/// Only the first `max_items` result cards of each page are read.
pub struct KyoboClient {
    client: Client,
    base_url: Url,
    max_items: usize,
}

impl KyoboClient {
    /// Creates a client pointed at the production Kyobo search host.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str, max_items: usize) -> Result<Self, ScraperError> {
        Self::with_base_url(timeout_secs, user_agent, max_items, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the client cannot be built, or
    /// [`ScraperError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        max_items: usize,
        base_url: &str,
    ) -> Result<Self, ScraperError> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            base_url: parse_base_url(base_url)?,
            max_items,
        })
    }

    /// Builds `{base}/search?keyword=..[&page=..]` with encoded parameters.
    /// The first page omits `page`, matching the site's own links.
    fn search_url(&self, keyword: &str, page: u32) -> Result<Url, ScraperError> {
        let mut url = endpoint_url(&self.base_url, "search")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("keyword", keyword);
            if page > 1 {
                pairs.append_pair("page", &page.to_string());
            }
        }
        Ok(url)
    }
}

impl BookSource for KyoboClient {
    fn name(&self) -> &'static str {
        "kyobo"
    }

    async fn search(&self, keyword: &str, page: u32) -> Result<Vec<BookRecord>, ScraperError> {
        let url = self.search_url(keyword, page)?;
        tracing::debug!(%url, keyword, page, "fetching kyobo search page");

        let response = self.client.get(url.clone()).send().await?;
        let body = check_status(response, &url)?.text().await?;

        let books = extract_books(&body, &url, self.max_items)?;
        tracing::debug!(keyword, page, count = books.len(), "parsed kyobo results");
        Ok(books)
    }
}

use hidbook_core::BookRecord;
use reqwest::{Client, Url};

use super::{build_http_client, check_status, endpoint_url, parse_base_url};
use crate::error::ScraperError;
use crate::normalize::normalize_aladin_item;
use crate::source::BookSource;
use crate::types::AladinSearchResponse;

const DEFAULT_BASE_URL: &str = "http://www.aladin.co.kr/ttb/api";
const API_VERSION: &str = "20131101";

/// Client for the Aladin TTB `ItemSearch` API.
pub struct AladinClient {
    client: Client,
    api_key: String,
    base_url: Url,
    max_results: u32,
}

impl AladinClient {
    /// Creates a client pointed at the production Aladin API.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_results: u32,
    ) -> Result<Self, ScraperError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, max_results, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the client cannot be built, or
    /// [`ScraperError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_results: u32,
        base_url: &str,
    ) -> Result<Self, ScraperError> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            api_key: api_key.to_owned(),
            base_url: parse_base_url(base_url)?,
            max_results: max_results.clamp(1, 50),
        })
    }

    fn search_url(&self, keyword: &str, page: u32) -> Result<Url, ScraperError> {
        let mut url = endpoint_url(&self.base_url, "ItemSearch.aspx")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("ttbkey", &self.api_key);
            pairs.append_pair("Query", keyword);
            pairs.append_pair("QueryType", "Keyword");
            pairs.append_pair("MaxResults", &self.max_results.to_string());
            pairs.append_pair("start", &page.max(1).to_string());
            pairs.append_pair("SearchTarget", "Book");
            pairs.append_pair("output", "js");
            pairs.append_pair("Version", API_VERSION);
            pairs.append_pair("Cover", "Big");
        }
        Ok(url)
    }

    /// Parses an `ItemSearch` body. The `js` output is sometimes terminated
    /// with a stray `;`, which is stripped before decoding.
    fn parse_body(body: &str, keyword: &str) -> Result<Vec<BookRecord>, ScraperError> {
        let trimmed = body.trim().trim_end_matches(';');
        let parsed: AladinSearchResponse =
            serde_json::from_str(trimmed).map_err(|e| ScraperError::Deserialize {
                context: format!("ItemSearch(query={keyword})"),
                source: e,
            })?;

        if let Some(code) = parsed.error_code {
            return Err(ScraperError::Api {
                code,
                message: parsed
                    .error_message
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        Ok(parsed.item.into_iter().map(normalize_aladin_item).collect())
    }
}

impl BookSource for AladinClient {
    fn name(&self) -> &'static str {
        "aladin"
    }

    async fn search(&self, keyword: &str, page: u32) -> Result<Vec<BookRecord>, ScraperError> {
        let url = self.search_url(keyword, page)?;
        // The query string carries the API key; only the bare endpoint is
        // ever logged or reported.
        let mut endpoint = url.clone();
        endpoint.set_query(None);
        tracing::debug!(%endpoint, keyword, page, "querying aladin item search");

        let response = self.client.get(url).send().await.map_err(reqwest::Error::without_url)?;
        let body = check_status(response, &endpoint)?
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;
        let books = Self::parse_body(&body, keyword)?;
        tracing::debug!(keyword, page, count = books.len(), "parsed aladin results");
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> AladinClient {
        AladinClient::with_base_url("ttb-key", 5, "hidbook-test/0.1", 50, "http://www.aladin.co.kr/ttb/api")
            .expect("client construction should not fail")
    }

    fn param(url: &Url, name: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn search_url_carries_fixed_parameter_set() {
        let url = test_client().search_url("철학", 2).unwrap();
        assert_eq!(url.path(), "/ttb/api/ItemSearch.aspx");
        assert_eq!(param(&url, "ttbkey").as_deref(), Some("ttb-key"));
        assert_eq!(param(&url, "Query").as_deref(), Some("철학"));
        assert_eq!(param(&url, "QueryType").as_deref(), Some("Keyword"));
        assert_eq!(param(&url, "MaxResults").as_deref(), Some("50"));
        assert_eq!(param(&url, "start").as_deref(), Some("2"));
        assert_eq!(param(&url, "output").as_deref(), Some("js"));
        assert_eq!(param(&url, "Version").as_deref(), Some("20131101"));
    }

    #[test]
    fn max_results_is_capped_at_fifty() {
        let client =
            AladinClient::with_base_url("k", 5, "ua", 200, "http://localhost").unwrap();
        let url = client.search_url("a", 1).unwrap();
        assert_eq!(param(&url, "MaxResults").as_deref(), Some("50"));
    }

    #[test]
    fn parse_body_tolerates_trailing_semicolon() {
        let body = r#"{"item":[{"title":"사유의 방식","description":"설명"}]};"#;
        let books = AladinClient::parse_body(body, "사유").unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "사유의 방식");
    }

    #[test]
    fn parse_body_surfaces_api_error() {
        let body = r#"{"errorCode":8,"errorMessage":"잘못된 TTBKey 입니다."}"#;
        let err = AladinClient::parse_body(body, "q").unwrap_err();
        assert!(matches!(err, ScraperError::Api { code: 8, .. }), "got {err:?}");
    }

    #[test]
    fn parse_body_rejects_non_json() {
        let err = AladinClient::parse_body("<html></html>", "q").unwrap_err();
        assert!(matches!(err, ScraperError::Deserialize { .. }));
    }
}

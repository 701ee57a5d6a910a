//! HTTP clients for the supported bookstores.

mod aladin;
mod kyobo;

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ScraperError;

pub use aladin::AladinClient;
pub use kyobo::KyoboClient;

/// Builds the shared `reqwest::Client` with a fixed timeout and `User-Agent`.
///
/// The connect timeout never exceeds the overall request timeout.
fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, ScraperError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Parses a base URL, normalising it to end with exactly one slash so
/// `Url::join` appends to the path instead of replacing its last segment.
fn parse_base_url(base_url: &str) -> Result<Url, ScraperError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| ScraperError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

/// Joins `endpoint` onto a base URL produced by [`parse_base_url`].
fn endpoint_url(base_url: &Url, endpoint: &str) -> Result<Url, ScraperError> {
    base_url
        .join(endpoint)
        .map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })
}

/// Returns an error for any non-2xx response, otherwise the response itself.
///
/// `url` is what the error reports; callers pass a redacted form when the
/// real URL carries credentials.
fn check_status(response: reqwest::Response, url: &Url) -> Result<reqwest::Response, ScraperError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ScraperError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

//! Aladin TTB `ItemSearch` response types (`output=js`, `Version=20131101`).
//!
//! Successful responses carry an `item` array; error responses carry only
//! `errorCode` and `errorMessage` with HTTP 200. Every item field is optional
//! in practice, so all of them default.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AladinSearchResponse {
    #[serde(default)]
    pub item: Vec<AladinItem>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AladinItem {
    #[serde(default)]
    pub title: String,
    /// Short introduction. May contain HTML entities and inline tags.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    /// Star rating on a 0–10 scale, not a review count.
    #[serde(default)]
    pub customer_review_rank: Option<u8>,
}

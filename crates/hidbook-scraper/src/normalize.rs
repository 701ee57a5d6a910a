//! Conversion from raw source shapes to [`hidbook_core::BookRecord`].

use std::sync::LazyLock;

use hidbook_core::BookRecord;
use regex::Regex;

use crate::types::AladinItem;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<[^>]+>").expect("valid tags regex"));

/// Converts an Aladin API item into a [`BookRecord`].
///
/// Aladin exposes a star rating but no review count, so `review_count` stays
/// `None`. Empty link and cover strings are treated as absent.
#[must_use]
pub fn normalize_aladin_item(item: AladinItem) -> BookRecord {
    BookRecord {
        title: clean_text(&item.title),
        description: clean_text(&item.description),
        review_count: None,
        link: non_empty(item.link),
        cover_url: non_empty(item.cover),
        score: None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Strips inline tags, decodes the common HTML entities, and collapses runs
/// of whitespace into single spaces.
#[must_use]
pub fn clean_text(input: &str) -> String {
    let no_tags = TAG_RE.replace_all(input, " ");
    decode_entities(&no_tags)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes the handful of entities that show up in bookstore descriptions.
/// `&amp;` goes last so `&amp;lt;` decodes to a literal `&lt;`.
fn decode_entities(input: &str) -> String {
    input
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, description: &str) -> AladinItem {
        AladinItem {
            title: title.to_string(),
            description: description.to_string(),
            link: None,
            cover: None,
            customer_review_rank: None,
        }
    }

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  사유의\n\n   문장  "), "사유의 문장");
    }

    #[test]
    fn clean_text_strips_tags() {
        assert_eq!(clean_text("<b>침묵</b>의<br/>세계"), "침묵 의 세계");
    }

    #[test]
    fn clean_text_decodes_entities() {
        assert_eq!(clean_text("&lt;철학&gt; &amp; 삶"), "<철학> & 삶");
        assert_eq!(clean_text("&amp;lt;"), "&lt;");
    }

    #[test]
    fn normalize_keeps_link_and_cover() {
        let mut raw = item("제목", "소개");
        raw.link = Some("https://www.aladin.co.kr/shop/wproduct.aspx?ItemId=1".to_string());
        raw.cover = Some("https://image.aladin.co.kr/cover.jpg".to_string());
        raw.customer_review_rank = Some(9);
        let record = normalize_aladin_item(raw);
        assert_eq!(record.title, "제목");
        assert!(record.link.is_some());
        assert!(record.cover_url.is_some());
        assert_eq!(record.review_count, None);
        assert_eq!(record.score, None);
    }

    #[test]
    fn normalize_treats_blank_urls_as_absent() {
        let mut raw = item("제목", "소개");
        raw.link = Some("  ".to_string());
        raw.cover = Some(String::new());
        let record = normalize_aladin_item(raw);
        assert_eq!(record.link, None);
        assert_eq!(record.cover_url, None);
    }
}

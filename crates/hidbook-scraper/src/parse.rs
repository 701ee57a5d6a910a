//! Extraction of book records from the Kyobo search results page.
//!
//! Each result card is an `li.prod_item`. Inside it the title lives in
//! `span.prod_name`, the blurb in `p.prod_introduction`, and the Klover review
//! count in `span.review_klover_text` (rendered as e.g. `(1,234)`).
//!
//! A page that has neither result cards nor any of the known result/empty
//! containers is reported as a parse failure: the markup changed, or the
//! request landed somewhere other than a search page.

use hidbook_core::BookRecord;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;
use crate::normalize::clean_text;

const ITEM: &str = "li.prod_item";
const TITLE: &str = "span.prod_name";
const DESCRIPTION: &str = "p.prod_introduction";
const REVIEWS: &str = "span.review_klover_text";
const LINK: &str = "a.prod_info[href], a.prod_link[href], a[href]";
const COVER: &str = "img";
/// Containers present on a search page even when it has zero hits.
const SEARCH_PAGE_MARKERS: &str = "#shopData_list, .prod_list, .no_data, .search_result_wrap";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid css selector")
}

/// Extracts up to `max_items` records from a Kyobo search results page.
///
/// `page_url` resolves relative links and image sources, and names the page
/// in parse errors.
///
/// # Errors
///
/// Returns [`ScraperError::Parse`] when the document does not look like a
/// search results page at all.
pub fn extract_books(
    html: &str,
    page_url: &Url,
    max_items: usize,
) -> Result<Vec<BookRecord>, ScraperError> {
    let document = Html::parse_document(html);
    let item_selector = selector(ITEM);

    let mut items = document.select(&item_selector).peekable();
    if items.peek().is_none() {
        let markers = selector(SEARCH_PAGE_MARKERS);
        if document.select(&markers).next().is_none() {
            return Err(ScraperError::Parse {
                url: page_url.to_string(),
                reason: format!("no `{ITEM}` cards and no search result container"),
            });
        }
        return Ok(Vec::new());
    }

    let title_selector = selector(TITLE);
    let description_selector = selector(DESCRIPTION);
    let reviews_selector = selector(REVIEWS);
    let link_selector = selector(LINK);
    let cover_selector = selector(COVER);

    let books = items
        .take(max_items)
        .map(|item| BookRecord {
            title: first_text(item, &title_selector),
            description: first_text(item, &description_selector),
            review_count: parse_review_count(&first_text(item, &reviews_selector)),
            link: item
                .select(&link_selector)
                .find_map(|a| a.value().attr("href"))
                .and_then(|href| resolve(page_url, href)),
            cover_url: item
                .select(&cover_selector)
                .find_map(|img| img.value().attr("src").or_else(|| img.value().attr("data-src")))
                .and_then(|src| resolve(page_url, src)),
            score: None,
        })
        .collect();

    Ok(books)
}

/// Whitespace-collapsed text of the first match, or an empty string.
fn first_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|el| clean_text(&el.text().collect::<String>()))
        .unwrap_or_default()
}

/// Pulls the digits out of a review label such as `(1,234)` or `리뷰 12건`.
///
/// Returns `None` when the label has no digits or the number overflows.
#[must_use]
pub fn parse_review_count(label: &str) -> Option<u32> {
    let digits: String = label.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Resolves `href` against the page URL, dropping `javascript:` and fragment
/// links that lead nowhere.
fn resolve(page_url: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
        return None;
    }
    page_url.join(href).ok().map(String::from)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;

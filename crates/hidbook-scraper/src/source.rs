use std::future::Future;

use hidbook_core::BookRecord;

use crate::error::ScraperError;

/// A bookstore that can be searched by keyword.
///
/// `page` is 1-based. An empty `Vec` is a valid answer (no hits); transport,
/// status, and parse problems are errors so the caller can decide whether to
/// move on to the next keyword.
pub trait BookSource {
    /// Short name used in logs and the result caption.
    fn name(&self) -> &'static str;

    fn search(
        &self,
        keyword: &str,
        page: u32,
    ) -> impl Future<Output = Result<Vec<BookRecord>, ScraperError>> + Send;
}

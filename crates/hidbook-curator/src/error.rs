use hidbook_scraper::ScraperError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurateError {
    /// Every fetch for every keyword failed, so nothing could be recommended
    /// and nothing was learned. Reported to the user; they can retry.
    #[error("{source_name} could not be searched ({attempts} attempts failed): {last}")]
    SourceUnavailable {
        source_name: &'static str,
        attempts: u32,
        #[source]
        last: ScraperError,
    },
}

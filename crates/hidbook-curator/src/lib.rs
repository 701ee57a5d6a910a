//! Turning raw bookstore results into one recommended "hidden" book.
//!
//! The flow is fetch → filter → select → explain: [`pipeline::Curator`] walks
//! a mood's keywords through a [`hidbook_scraper::BookSource`], drops
//! overexposed or thin records ([`filter`]), picks one ([`select`]) with an
//! RNG seeded from the request's date, mood, and retry count ([`seed`]), and
//! attaches a short blurb ([`reason`]).

pub mod error;
pub mod filter;
pub mod pipeline;
pub mod reason;
pub mod scorer;
pub mod seed;
pub mod select;

pub use error::CurateError;
pub use filter::filter_records;
pub use pipeline::{Curator, CuratorSettings, Outcome, Recommendation};
pub use reason::make_reason;
pub use scorer::score_record;
pub use seed::seeded_rng;
pub use select::select;

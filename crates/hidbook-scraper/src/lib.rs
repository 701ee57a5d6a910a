//! Bookstore source clients.
//!
//! Two backends implement [`BookSource`]: [`KyoboClient`] scrapes the Kyobo
//! search results page, [`AladinClient`] calls the Aladin TTB `ItemSearch`
//! API. Both return plain [`hidbook_core::BookRecord`]s and never retry.

pub mod client;
pub mod error;
pub mod normalize;
pub mod parse;
pub mod source;
pub mod types;

pub use client::{AladinClient, KyoboClient};
pub use error::ScraperError;
pub use source::BookSource;

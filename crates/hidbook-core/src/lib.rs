//! Shared types and configuration for the hidbook workspace.
//!
//! Everything here is plain data: book records, moods, the session counter,
//! curation rules, and the environment-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod curation;
pub mod error;
pub mod mood;
pub mod record;
pub mod session;

pub use app_config::{AppConfig, Environment, SelectionPolicy, SourceKind};
pub use config::{load_app_config, load_app_config_from_env};
pub use curation::{load_curation, CurationRules, KeywordWeight, MatchScope};
pub use error::ConfigError;
pub use mood::Mood;
pub use record::BookRecord;
pub use session::{SelectionContext, SessionContext};

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Which part of a record the denylist is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchScope {
    Title,
    #[default]
    TitleAndDescription,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub keyword: String,
    pub weight: i32,
}

/// Filter and scoring rules applied to every search result.
///
/// Missing YAML fields fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurationRules {
    /// Case-sensitive substrings that mark a record as overexposed.
    pub denylist: Vec<String>,
    pub match_scope: MatchScope,
    /// Descriptions shorter than this many characters are dropped.
    pub min_description_chars: usize,
    pub density_keywords: Vec<KeywordWeight>,
    /// Records with fewer reviews than this get `review_bonus` added.
    pub review_bonus_threshold: u32,
    pub review_bonus: i32,
    /// Scored selection ignores records below this score.
    pub min_score: i32,
    pub top_k: usize,
}

impl Default for CurationRules {
    fn default() -> Self {
        let denylist = [
            "베스트셀러",
            "힐링",
            "성공",
            "유튜브",
            "tv",
            "추천",
            "에세이스트",
            "셀럽",
        ];
        let weights = [
            ("사유", 3),
            ("문장", 3),
            ("태도", 2),
            ("관점", 2),
            ("일상", 1),
            ("침묵", 1),
        ];
        Self {
            denylist: denylist.iter().map(ToString::to_string).collect(),
            match_scope: MatchScope::TitleAndDescription,
            min_description_chars: 40,
            density_keywords: weights
                .iter()
                .map(|(keyword, weight)| KeywordWeight {
                    keyword: (*keyword).to_string(),
                    weight: *weight,
                })
                .collect(),
            review_bonus_threshold: 300,
            review_bonus: 2,
            min_score: 5,
            top_k: 5,
        }
    }
}

/// Load and validate curation rules from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_curation(path: &Path) -> Result<CurationRules, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CurationFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_curation(&content)
}

/// Parse and validate curation rules from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text is not valid YAML or fails validation.
pub fn parse_curation(content: &str) -> Result<CurationRules, ConfigError> {
    let rules: CurationRules = serde_yaml::from_str(content)?;
    validate_curation(&rules)?;
    Ok(rules)
}

fn validate_curation(rules: &CurationRules) -> Result<(), ConfigError> {
    // An empty pattern is a substring of everything and would drop every record.
    if rules.denylist.iter().any(|term| term.is_empty()) {
        return Err(ConfigError::Validation(
            "denylist entries must be non-empty".to_string(),
        ));
    }

    if rules.top_k == 0 {
        return Err(ConfigError::Validation("top_k must be at least 1".to_string()));
    }

    let mut seen = HashSet::new();
    for entry in &rules.density_keywords {
        if entry.keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "density keywords must be non-empty".to_string(),
            ));
        }
        if !seen.insert(entry.keyword.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate density keyword: '{}'",
                entry.keyword
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "curation_test.rs"]
mod tests;

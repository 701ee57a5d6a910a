//! Terminal rendering. Every function here is pure and returns the text to
//! print, so the output can be tested without a terminal.

use std::fmt::Write as _;

use hidbook_core::Mood;
use hidbook_curator::{Outcome, Recommendation};

pub(crate) const NOT_FOUND: &str = "오늘은 조용히 남아 있는 책을 찾지 못했습니다.";

const PREVIEW_CHARS: usize = 120;

/// Renders a pipeline outcome as human-readable text.
pub(crate) fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Found(rec) => render_recommendation(rec),
        Outcome::NotFound => NOT_FOUND.to_string(),
    }
}

/// Renders a pipeline outcome as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub(crate) fn render_outcome_json(outcome: &Outcome) -> anyhow::Result<String> {
    let value = match outcome {
        Outcome::Found(rec) => serde_json::json!({ "status": "found", "recommendation": rec }),
        Outcome::NotFound => serde_json::json!({ "status": "not_found", "message": NOT_FOUND }),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

pub(crate) fn render_error(err: &dyn std::fmt::Display) -> String {
    format!("검색 중 문제가 발생했습니다: {err}")
}

fn render_recommendation(rec: &Recommendation) -> String {
    let record = &rec.record;
    let mut out = String::new();

    let _ = writeln!(out, "[{}] {}", rec.mood.label(), record.title);
    if !record.description.trim().is_empty() {
        let _ = writeln!(out, "  {}", preview(&record.description, PREVIEW_CHARS));
    }
    if let Some(link) = &record.link {
        let _ = writeln!(out, "  링크: {link}");
    }
    if let Some(cover) = &record.cover_url {
        let _ = writeln!(out, "  표지: {cover}");
    }

    if !record.description.trim().is_empty() {
        let _ = writeln!(out, "\n소개\n{}", record.description.trim());
    }

    let _ = writeln!(out, "\n{}", rec.reason);

    let _ = write!(out, "\n출처: {}", rec.source);
    if let Some(keyword) = &rec.keyword {
        let _ = write!(out, " · 키워드 \"{keyword}\"");
    }
    if rec.fallback {
        let _ = write!(
            out,
            "\n(조건에 맞는 책이 없어 전체 검색 결과에서 골랐습니다.)"
        );
    }

    out
}

/// Lists every mood with its slug, label, and search keywords.
pub(crate) fn render_moods() -> String {
    let mut out = String::new();
    for mood in Mood::ALL {
        let _ = writeln!(
            out,
            "{:<6}{}  ({})",
            mood.slug(),
            mood.label(),
            mood.keywords().join(", ")
        );
    }
    out
}

pub(crate) fn render_help() -> &'static str {
    "search          새로 찾기 (재시도 횟수 초기화)\n\
     retry           같은 조건으로 다른 책 찾기\n\
     mood <이름>     분위기 바꾸기 (deep, calm, wide, rise 또는 한글 이름)\n\
     help            도움말\n\
     quit            끝내기\n\
     빈 줄           search 와 같음"
}

/// First `max` characters of `text` on one line, with an ellipsis when cut.
fn preview(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use hidbook_core::BookRecord;

    use super::*;

    fn recommendation(record: BookRecord, fallback: bool) -> Recommendation {
        Recommendation {
            record,
            reason: "조용히 남는 책이다.".to_string(),
            mood: Mood::Deep,
            keyword: (!fallback).then(|| "철학".to_string()),
            seed_key: "2024-01-01생각이 깊어지는 책0".to_string(),
            fallback,
            source: "kyobo",
        }
    }

    #[test]
    fn not_found_renders_fixed_message() {
        assert_eq!(render_outcome(&Outcome::NotFound), NOT_FOUND);
    }

    #[test]
    fn error_renders_one_line() {
        let line = render_error(&"timeout");
        assert_eq!(line, "검색 중 문제가 발생했습니다: timeout");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn recommendation_shows_all_fields() {
        let record = BookRecord {
            link: Some("https://books.test/1".to_string()),
            cover_url: Some("https://books.test/1.jpg".to_string()),
            ..BookRecord::new("느린 질문들", "답을 서두르지 않는 사유의 기록.")
        };
        let text = render_outcome(&Outcome::Found(Box::new(recommendation(record, false))));

        assert!(text.starts_with("[생각이 깊어지는 책] 느린 질문들"));
        assert!(text.contains("링크: https://books.test/1"));
        assert!(text.contains("표지: https://books.test/1.jpg"));
        assert!(text.contains("소개\n답을 서두르지 않는 사유의 기록."));
        assert!(text.contains("조용히 남는 책이다."));
        assert!(text.contains("출처: kyobo · 키워드 \"철학\""));
        assert!(!text.contains("전체 검색 결과"));
    }

    #[test]
    fn fallback_pick_is_flagged() {
        let record = BookRecord::new("힐링", "");
        let text = render_outcome(&Outcome::Found(Box::new(recommendation(record, true))));
        assert!(text.contains("전체 검색 결과에서 골랐습니다"));
        assert!(!text.contains("소개"));
        assert!(!text.contains("키워드"));
    }

    #[test]
    fn preview_is_truncated_to_120_chars() {
        let long = "가".repeat(200);
        let p = preview(&long, PREVIEW_CHARS);
        assert_eq!(p.chars().count(), PREVIEW_CHARS + 1);
        assert!(p.ends_with('…'));
        assert_eq!(preview("짧은\n  소개", PREVIEW_CHARS), "짧은 소개");
    }

    #[test]
    fn json_outcome_has_status() {
        let json = render_outcome_json(&Outcome::NotFound).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "not_found");

        let record = BookRecord::new("느린 질문들", "사유");
        let outcome = Outcome::Found(Box::new(recommendation(record, false)));
        let json = render_outcome_json(&outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["recommendation"]["record"]["title"], "느린 질문들");
        assert_eq!(value["recommendation"]["mood"], "deep");
    }

    #[test]
    fn moods_lists_every_slug() {
        let text = render_moods();
        for mood in Mood::ALL {
            assert!(text.contains(mood.slug()));
            assert!(text.contains(mood.label()));
        }
    }
}

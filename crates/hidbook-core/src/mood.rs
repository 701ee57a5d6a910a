use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The four reading moods a user can pick from.
///
/// Each mood maps to a fixed, ordered list of search keywords and a pool of
/// reason templates. Templates may contain a `{focus}` placeholder that the
/// reason generator fills from the chosen book's description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Deep,
    Calm,
    Wide,
    Rise,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Deep, Mood::Calm, Mood::Wide, Mood::Rise];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Mood::Deep => "deep",
            Mood::Calm => "calm",
            Mood::Wide => "wide",
            Mood::Rise => "rise",
        }
    }

    /// User-facing label. Also the mood component of the selection seed key.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mood::Deep => "생각이 깊어지는 책",
            Mood::Calm => "마음이 조용해지는 책",
            Mood::Wide => "시야가 넓어지는 책",
            Mood::Rise => "다시 일어서게 하는 책",
        }
    }

    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Mood::Deep => &["인문학 사유", "철학", "사유 에세이"],
            Mood::Calm => &["침묵", "산문집", "고요"],
            Mood::Wide => &["관점", "인류학", "과학 교양"],
            Mood::Rise => &["회복", "삶의 태도", "일상 철학"],
        }
    }

    #[must_use]
    pub fn reason_pool(self) -> &'static [&'static str] {
        match self {
            Mood::Deep => &[
                "이 책은 크게 알려지지 않았지만,\n\
                 삶을 다루는 문장이 비교적 절제되어 있다.\n\n\
                 요즘 책들이 해답이나 메시지를 전면에 내세울 때,\n\
                 이 책은 생각이 머무는 지점을 남긴다.\n\n\
                 읽고 나면 무엇을 알게 되기보다는,\n\
                 하루를 대하는 태도가 조용히 남는다.",
                "빠르게 결론을 내리지 않는 책이다.\n\
                 질문 하나를 오래 붙들고 있는 동안,\n\
                 읽는 사람의 생각도 함께 느려진다.",
                "「{focus}」\n\
                 이 한 줄에서 시작해 천천히 따라가 보기 좋은 책이다.\n\
                 답보다 질문이 오래 남는다.",
            ],
            Mood::Calm => &[
                "소리를 높이지 않는 문장들이 모여 있다.\n\
                 읽는 동안 주변이 조금 조용해지는 느낌이 든다.",
                "급하게 넘기기보다 한 장씩 머물러 읽게 되는 책이다.\n\
                 하루의 끝에 펼쳐 두기 좋다.",
                "「{focus}」\n\
                 이런 문장 곁에서 잠시 숨을 고르기 좋은 책이다.",
            ],
            Mood::Wide => &[
                "익숙한 것을 낯설게 보게 만드는 책이다.\n\
                 다 읽고 나면 같은 풍경이 조금 다르게 보인다.",
                "한 분야에 머물지 않고 경계를 넘나드는 시선이 있다.\n\
                 생각의 지도가 한 칸 넓어진다.",
                "「{focus}」\n\
                 여기서 출발하는 시선이 생각보다 멀리 간다.",
            ],
            Mood::Rise => &[
                "거창한 응원 대신 작은 태도를 건네는 책이다.\n\
                 다시 시작하는 데 필요한 만큼만 힘을 보탠다.",
                "넘어진 자리에서 천천히 몸을 일으키는 이야기다.\n\
                 서두르지 않아도 된다고 말해 준다.",
                "「{focus}」\n\
                 이 문장이 내일 아침까지 곁에 남아 있을 것이다.",
            ],
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Mood {
    type Err = ConfigError;

    /// Accepts either the ASCII slug (case-insensitive) or the Korean label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Mood::ALL
            .into_iter()
            .find(|m| m.slug().eq_ignore_ascii_case(trimmed) || m.label() == trimmed)
            .ok_or_else(|| ConfigError::UnknownMood(trimmed.to_string()))
    }
}

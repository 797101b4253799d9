//! 검색 질의와 자동완성 정책.

/// 검색 폼 입력값. 생성 시 공백을 정리하고 빈 값은 `None`으로 취급한다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub genre: Option<u32>,
    pub year: Option<u32>,
}

impl SearchQuery {
    pub fn new(text: &str, genre: Option<u32>, year: Option<u32>) -> Self {
        let text = text.trim();
        Self {
            text: (!text.is_empty()).then(|| text.to_string()),
            genre,
            year,
        }
    }

    /// 검색어와 필터가 모두 비었는지 여부. 비어 있으면 네트워크 호출 없이 거절한다.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.genre.is_none() && self.year.is_none()
    }

    /// `q`, `genre`, `year` 순서로 값이 있는 항목만 질의 파라미터로 만든다.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(text) = &self.text {
            pairs.push(("q", text.clone()));
        }
        if let Some(genre) = self.genre {
            pairs.push(("genre", genre.to_string()));
        }
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        pairs
    }
}

pub const DEFAULT_MIN_SUGGEST_CHARS: usize = 3;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// 자동완성 요청 조건(최소 글자 수)과 표시 개수 상한.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestPolicy {
    pub min_chars: usize,
    pub max_items: usize,
}

impl Default for SuggestPolicy {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_SUGGEST_CHARS,
            max_items: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl SuggestPolicy {
    /// 요청 가능한 입력이면 trim된 질의를 돌려준다.
    pub fn accept<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let trimmed = raw.trim();
        (trimmed.chars().count() >= self.min_chars).then_some(trimmed)
    }

    pub fn limit(&self, mut titles: Vec<String>) -> Vec<String> {
        titles.truncate(self.max_items);
        titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_without_filters_is_empty() {
        assert!(SearchQuery::new("   ", None, None).is_empty());
        assert!(!SearchQuery::new("", Some(1), None).is_empty());
        assert!(!SearchQuery::new("", None, Some(2009)).is_empty());
    }

    #[test]
    fn query_pairs_skip_missing_values() {
        let query = SearchQuery::new("  naruto ", None, Some(2002));
        assert_eq!(
            query.query_pairs(),
            vec![("q", "naruto".to_string()), ("year", "2002".to_string())]
        );
    }

    #[test]
    fn suggest_requires_three_trimmed_chars() {
        let policy = SuggestPolicy::default();
        assert_eq!(policy.accept("  on  "), None);
        assert_eq!(policy.accept("one"), Some("one"));
        assert_eq!(policy.accept("  one piece "), Some("one piece"));
    }

    #[test]
    fn suggest_counts_chars_not_bytes() {
        let policy = SuggestPolicy::default();
        assert_eq!(policy.accept("進撃"), None);
        assert_eq!(policy.accept("進撃の"), Some("進撃の"));
    }

    #[test]
    fn limit_keeps_first_five() {
        let titles = (0..8).map(|i| format!("t{i}")).collect();
        let limited = SuggestPolicy::default().limit(titles);
        assert_eq!(limited, vec!["t0", "t1", "t2", "t3", "t4"]);
    }
}

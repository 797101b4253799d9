//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::policy::DEFAULT_SYNOPSIS_PREVIEW_CHARS;
use crate::domain::search::{DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_SUGGEST_CHARS, SuggestPolicy};
use crate::domain::view::DEFAULT_CAROUSEL_WINDOW;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MESSAGE_TTL_MS: u64 = 5_000;
pub const DEFAULT_LOGIN_REDIRECT_MS: u64 = 1_000;
pub const DEFAULT_REGISTER_REDIRECT_MS: u64 = 2_000;
pub const DEFAULT_PROFILE_RETURN_MS: u64 = 1_500;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 백엔드 접속 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 토큰 저장 위치
    #[serde(default)]
    pub session: SessionConfig,
    /// 화면 동작(디바운스/메시지/리다이렉트 지연)
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    /// REST 백엔드 base URL
    pub base_url: Option<String>,
    /// 요청 타임아웃(ms)
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SessionConfig {
    /// 토큰 파일 경로(미지정 시 데이터 디렉터리)
    pub token_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct UiConfig {
    pub debounce_ms: Option<u64>,
    pub min_suggest_chars: Option<usize>,
    pub max_suggestions: Option<usize>,
    pub message_ttl_ms: Option<u64>,
    pub login_redirect_ms: Option<u64>,
    pub register_redirect_ms: Option<u64>,
    pub profile_return_ms: Option<u64>,
    pub synopsis_preview_chars: Option<usize>,
    pub carousel_window: Option<usize>,
}

impl Config {
    pub fn base_url(&self) -> String {
        self.server
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.server.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.ui.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS))
    }

    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.ui.message_ttl_ms.unwrap_or(DEFAULT_MESSAGE_TTL_MS))
    }

    pub fn login_redirect_ms(&self) -> u64 {
        self.ui.login_redirect_ms.unwrap_or(DEFAULT_LOGIN_REDIRECT_MS)
    }

    pub fn register_redirect_ms(&self) -> u64 {
        self.ui
            .register_redirect_ms
            .unwrap_or(DEFAULT_REGISTER_REDIRECT_MS)
    }

    pub fn profile_return_ms(&self) -> u64 {
        self.ui.profile_return_ms.unwrap_or(DEFAULT_PROFILE_RETURN_MS)
    }

    pub fn synopsis_preview_chars(&self) -> usize {
        self.ui
            .synopsis_preview_chars
            .unwrap_or(DEFAULT_SYNOPSIS_PREVIEW_CHARS)
    }

    pub fn carousel_window(&self) -> usize {
        self.ui.carousel_window.unwrap_or(DEFAULT_CAROUSEL_WINDOW)
    }

    pub fn suggest_policy(&self) -> SuggestPolicy {
        SuggestPolicy {
            min_chars: self.ui.min_suggest_chars.unwrap_or(DEFAULT_MIN_SUGGEST_CHARS),
            max_items: self.ui.max_suggestions.unwrap_or(DEFAULT_MAX_SUGGESTIONS),
        }
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        merge_opt(&mut self.server.base_url, other.server.base_url);
        merge_opt(&mut self.server.timeout_ms, other.server.timeout_ms);
        merge_opt(&mut self.session.token_path, other.session.token_path);

        let ui = other.ui;
        merge_opt(&mut self.ui.debounce_ms, ui.debounce_ms);
        merge_opt(&mut self.ui.min_suggest_chars, ui.min_suggest_chars);
        merge_opt(&mut self.ui.max_suggestions, ui.max_suggestions);
        merge_opt(&mut self.ui.message_ttl_ms, ui.message_ttl_ms);
        merge_opt(&mut self.ui.login_redirect_ms, ui.login_redirect_ms);
        merge_opt(&mut self.ui.register_redirect_ms, ui.register_redirect_ms);
        merge_opt(&mut self.ui.profile_return_ms, ui.profile_return_ms);
        merge_opt(&mut self.ui.synopsis_preview_chars, ui.synopsis_preview_chars);
        merge_opt(&mut self.ui.carousel_window, ui.carousel_window);
    }
}

fn merge_opt<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_browser_behaviour() {
        let cfg = Config::default();
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.debounce(), Duration::from_millis(300));
        assert_eq!(cfg.message_ttl(), Duration::from_secs(5));
        assert_eq!(cfg.suggest_policy(), SuggestPolicy::default());
    }

    #[test]
    fn later_file_overrides_only_present_values() {
        let mut base: Config = serde_json::from_str(
            r#"{"server": {"base_url": "http://a/", "timeout_ms": 500}, "ui": {"debounce_ms": 100}}"#,
        )
        .unwrap();
        let overlay: Config =
            serde_json::from_str(r#"{"server": {"base_url": "http://b/"}}"#).unwrap();
        base.merge_from(overlay);

        assert_eq!(base.base_url(), "http://b");
        assert_eq!(base.timeout(), Duration::from_millis(500));
        assert_eq!(base.debounce(), Duration::from_millis(100));
    }
}

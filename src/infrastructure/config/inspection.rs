//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::{LoadedConfig, token_path};
use crate::application::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub base_url_override: Option<String>,
    pub config: Config,
    pub effective: EffectiveSettings,
}

/// 기본값까지 반영한 실제 적용값.
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub base_url: String,
    pub timeout_ms: u128,
    pub token_path: String,
    pub debounce_ms: u128,
    pub min_suggest_chars: usize,
    pub max_suggestions: usize,
    pub message_ttl_ms: u128,
    pub login_redirect_ms: u64,
    pub register_redirect_ms: u64,
    pub profile_return_ms: u64,
    pub synopsis_preview_chars: usize,
    pub carousel_window: usize,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let effective = EffectiveSettings::from_config(&loaded.config);
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            base_url_override: loaded.base_url_override,
            config: loaded.config,
            effective,
        }
    }
}

impl EffectiveSettings {
    fn from_config(cfg: &Config) -> Self {
        let suggest = cfg.suggest_policy();
        Self {
            base_url: cfg.base_url(),
            timeout_ms: cfg.timeout().as_millis(),
            token_path: token_path(cfg).display().to_string(),
            debounce_ms: cfg.debounce().as_millis(),
            min_suggest_chars: suggest.min_chars,
            max_suggestions: suggest.max_items,
            message_ttl_ms: cfg.message_ttl().as_millis(),
            login_redirect_ms: cfg.login_redirect_ms(),
            register_redirect_ms: cfg.register_redirect_ms(),
            profile_return_ms: cfg.profile_return_ms(),
            synopsis_preview_chars: cfg.synopsis_preview_chars(),
            carousel_window: cfg.carousel_window(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn inspection_reports_paths_and_defaults() {
        let loaded = LoadedConfig {
            config: Config::default(),
            searched_paths: vec![PathBuf::from("/etc/anishelf/config.json")],
            loaded_paths: Vec::new(),
            base_url_override: Some("http://localhost:9000".into()),
        };
        let inspection = ConfigInspection::from_loaded(loaded);
        let json = serde_json::to_value(&inspection).unwrap();

        assert_eq!(json["searched_paths"][0], "/etc/anishelf/config.json");
        assert_eq!(json["base_url_override"], "http://localhost:9000");
        assert_eq!(json["effective"]["debounce_ms"], 300);
        assert_eq!(json["effective"]["min_suggest_chars"], 3);
    }
}

//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::json;

use crate::application::config::{
    Config, DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_MS, DEFAULT_LOGIN_REDIRECT_MS,
    DEFAULT_MESSAGE_TTL_MS, DEFAULT_PROFILE_RETURN_MS, DEFAULT_REGISTER_REDIRECT_MS,
    DEFAULT_TIMEOUT_MS,
};
use crate::domain::policy::DEFAULT_SYNOPSIS_PREVIEW_CHARS;
use crate::domain::search::{DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_SUGGEST_CHARS};
use crate::domain::view::DEFAULT_CAROUSEL_WINDOW;

pub(crate) const CONFIG_ENV: &str = "ANISHELF_CONFIG";
pub(crate) const BASE_URL_ENV: &str = "ANISHELF_BASE_URL";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
    /// 환경변수로 덮어쓴 base URL (있을 때만)
    pub base_url_override: Option<String>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합하고 환경변수 오버라이드를 적용한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    if let Ok(path) = env::var(CONFIG_ENV)
        && !Path::new(&path).exists()
    {
        bootstrap_template(Path::new(&path))?;
    }

    let mut loaded = load_from_paths(config_paths())?;

    if let Ok(url) = env::var(BASE_URL_ENV)
        && !url.trim().is_empty()
    {
        loaded.config.server.base_url = Some(url.clone());
        loaded.base_url_override = Some(url);
    }

    Ok(loaded)
}

/// 주어진 경로를 낮은 우선순위부터 병합한다. 없는 파일은 건너뛴다.
pub(crate) fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
        base_url_override: None,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/anishelf/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("anishelf").join("config.json"));
    }

    paths.push(PathBuf::from(".anishelf/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

/// 설정 파일이 없을 때 기본값을 모두 채운 템플릿을 만든다.
pub(crate) fn bootstrap_template(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let template = json!({
        "server": {
            "base_url": DEFAULT_BASE_URL,
            "timeout_ms": DEFAULT_TIMEOUT_MS
        },
        "session": {
            "token_path": null
        },
        "ui": {
            "debounce_ms": DEFAULT_DEBOUNCE_MS,
            "min_suggest_chars": DEFAULT_MIN_SUGGEST_CHARS,
            "max_suggestions": DEFAULT_MAX_SUGGESTIONS,
            "message_ttl_ms": DEFAULT_MESSAGE_TTL_MS,
            "login_redirect_ms": DEFAULT_LOGIN_REDIRECT_MS,
            "register_redirect_ms": DEFAULT_REGISTER_REDIRECT_MS,
            "profile_return_ms": DEFAULT_PROFILE_RETURN_MS,
            "synopsis_preview_chars": DEFAULT_SYNOPSIS_PREVIEW_CHARS,
            "carousel_window": DEFAULT_CAROUSEL_WINDOW
        }
    });

    let rendered = serde_json::to_string_pretty(&template)?;
    fs::write(config_path, format!("{rendered}\n"))
        .with_context(|| format!("failed to create config template at {}", config_path.display()))
}

/// 토큰 파일 경로. 설정값이 없으면 사용자 데이터 디렉터리 아래를 쓴다.
pub fn token_path(config: &Config) -> PathBuf {
    if let Some(path) = config
        .session
        .token_path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        return PathBuf::from(path);
    }

    match dirs::data_dir() {
        Some(base) => base.join("anishelf").join("session.json"),
        None => PathBuf::from(".anishelf/session.json"),
    }
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn later_paths_take_priority_and_missing_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let system = dir.path().join("system.json");
        let project = dir.path().join("project.json");
        fs::write(
            &system,
            r#"{"server": {"base_url": "http://system", "timeout_ms": 2000}}"#,
        )
        .unwrap();
        fs::write(&project, r#"{"server": {"base_url": "http://project"}}"#).unwrap();

        let loaded = load_from_paths(vec![
            system.clone(),
            dir.path().join("missing.json"),
            project.clone(),
        ])
        .unwrap();

        assert_eq!(loaded.loaded_paths, vec![system, project]);
        assert_eq!(loaded.searched_paths.len(), 3);
        assert_eq!(loaded.config.base_url(), "http://project");
        assert_eq!(loaded.config.timeout(), Duration::from_millis(2000));
    }

    #[test]
    fn broken_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_from_paths(vec![path.clone()]).unwrap_err();
        assert!(format!("{err:#}").contains(&path.display().to_string()));
    }

    #[test]
    fn bootstrapped_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        bootstrap_template(&path).unwrap();

        let loaded = load_from_paths(vec![path]).unwrap();
        assert_eq!(loaded.config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(loaded.config.carousel_window(), DEFAULT_CAROUSEL_WINDOW);
    }

    #[test]
    fn explicit_token_path_wins() {
        let mut config = Config::default();
        config.session.token_path = Some("/tmp/anishelf-token.json".into());
        assert_eq!(token_path(&config), PathBuf::from("/tmp/anishelf-token.json"));
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let paths = dedup_paths(vec![
            PathBuf::from("a"),
            PathBuf::from("b"),
            PathBuf::from("a"),
        ]);
        assert_eq!(paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }
}

//! 카탈로그 백엔드 REST 연동 계층.
//! 응답 본문 해석(오류 문구/안내 문구)과 HTTP 구현체를 묶는다.

mod client;

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

pub use client::HttpAnimeApi;

/// 성공 응답의 `{message, ...}` 본문.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// 로그인 응답 `{access_token, token_type}`. `token_type`은 항상 bearer라 읽지 않는다.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginBody {
    pub access_token: String,
}

/// 오류 본문에서 사용자에게 보여줄 문구를 고른다.
/// `detail` 문자열 → 검증 오류 배열의 첫 `msg` → `message` 순서. JSON이 아니면 없음.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    let detail = match value.get("detail") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Array(items)) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    };

    detail
        .or_else(|| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .filter(|text| !text.trim().is_empty())
}

/// 아바타 업로드 MIME. 서버는 `image/*`만 받으므로 나머지는 서버 판정에 맡긴다.
pub fn avatar_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

//! 세션 토큰과 인증/프로필 폼 값 객체.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// 클라이언트에 영속 저장되는 키 이름.
pub const TOKEN_KEY: &str = "access_token";

/// 백엔드가 발급한 불투명 bearer 토큰. 빈 문자열은 허용하지 않는다.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// 로그에 토큰 원문이 남지 않도록 Debug 출력을 가린다.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// 로그인 폼(form-encoded).
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// 회원가입 폼(form-encoded).
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// 프로필 수정 폼(multipart). 아바타는 로컬 파일 경로로 받는다.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub avatar: Option<PathBuf>,
}

/// 비밀번호 변경 폼.
#[derive(Debug, Clone)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

/// 서버로 전송되는 비밀번호 변경 본문(JSON).
#[derive(Debug, Clone, Serialize)]
pub struct PasswordChangeBody<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
}

impl PasswordChange {
    /// 새 비밀번호와 확인값이 같을 때만 전송 본문을 만든다.
    pub fn body(&self) -> Option<PasswordChangeBody<'_>> {
        (self.new == self.confirm).then_some(PasswordChangeBody {
            current_password: &self.current,
            new_password: &self.new,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_rejected() {
        assert!(SessionToken::new("  ").is_none());
        assert_eq!(SessionToken::new(" abc ").unwrap().as_str(), "abc");
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = SessionToken::new("secret-jwt").unwrap();
        assert!(!format!("{token:?}").contains("secret"));
    }

    #[test]
    fn mismatched_confirmation_yields_no_body() {
        let form = PasswordChange {
            current: "Old12345".into(),
            new: "New12345".into(),
            confirm: "New12346".into(),
        };
        assert!(form.body().is_none());
    }

    #[test]
    fn matching_confirmation_serializes_server_fields() {
        let form = PasswordChange {
            current: "Old12345".into(),
            new: "New12345".into(),
            confirm: "New12345".into(),
        };
        let json = serde_json::to_value(form.body().unwrap()).unwrap();
        assert_eq!(json["current_password"], "Old12345");
        assert_eq!(json["new_password"], "New12345");
        assert!(json.get("confirm").is_none());
    }
}

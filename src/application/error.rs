//! HTTP 포트 경계에서 사용하는 오류 타입.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 응답. 프로필 조회에서 받으면 강제 로그아웃한다.
    #[error("unauthorized{}", detail_suffix(.detail))]
    Unauthorized { detail: Option<String> },
    /// 그 밖의 비정상 상태 코드.
    #[error("server rejected request ({status}){}", detail_suffix(.detail))]
    Rejected { status: u16, detail: Option<String> },
    #[error("connection error: {0}")]
    Connection(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// 요청을 만들기 전 로컬 입력(아바타 파일 등) 처리 실패.
    #[error("{0}")]
    Input(String),
}

impl ApiError {
    /// 서버가 제공한 `detail`/`message` 문구.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::Rejected { detail, .. } => detail.as_deref(),
            Self::Connection(_) | Self::InvalidResponse(_) | Self::Input(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

//! 화면 문구와 표시 규칙(요약 길이, 오류 문구 조합).

pub const DEFAULT_SYNOPSIS_PREVIEW_CHARS: usize = 100;
pub const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.jpg";

pub const CONNECTION_ERROR: &str = "Could not connect to the server.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const LOGIN_SUCCESS: &str = "Signed in successfully. Redirecting...";
pub const EMPTY_SEARCH: &str = "Enter a title, genre or year.";
pub const SEARCH_FAILED: &str = "Search failed.";
pub const NO_RESULTS: &str = "No results found.";
pub const NO_DESCRIPTION: &str = "No description.";
pub const NO_SYNOPSIS: &str = "Synopsis not available.";
pub const TRENDING_EMPTY: &str = "Could not load trending titles.";
pub const TRENDING_FAILED: &str = "Connection error.";
pub const DETAIL_FAILED: &str = "Could not load anime details.";
pub const NO_CHARACTERS: &str = "No character information.";
pub const FAVORITES_EMPTY: &str = "You have no saved favorites yet.";
pub const FAVORITES_FAILED: &str = "Could not load favorites.";
pub const SIGN_IN_FOR_FAVORITES: &str = "Sign in to save favorites.";
pub const PROFILE_UPDATED: &str = "Profile updated.";
pub const PROFILE_UPDATE_FAILED: &str = "Could not update profile.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const PASSWORD_CHANGED: &str = "Password changed.";
pub const PASSWORD_CHANGE_FAILED: &str = "Could not change password.";
pub const SIGNED_OUT: &str = "You have been signed out.";
pub const SIGN_IN_REQUIRED: &str = "Sign in first.";

/// 카드용 시놉시스 미리보기. 글자 수 기준으로 자르고 항상 말줄임표를 붙인다.
pub fn synopsis_preview(synopsis: Option<&str>, max_chars: usize) -> String {
    match synopsis.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => {
            let head: String = text.chars().take(max_chars).collect();
            format!("{head}...")
        }
        None => NO_DESCRIPTION.to_string(),
    }
}

pub fn login_error(detail: Option<&str>) -> String {
    format!("Access error: {}", detail.unwrap_or(INVALID_CREDENTIALS))
}

pub fn register_error(detail: Option<&str>) -> String {
    format!("Registration error: {}", detail.unwrap_or("unknown error"))
}

pub fn register_success(message: Option<&str>) -> String {
    let message = message.unwrap_or("Registration successful.");
    format!("{message} Redirecting...")
}

/// 상세 페이지 링크 경로.
pub fn detail_link(mal_id: u64) -> String {
    format!("/detail.html?mal_id={mal_id}")
}

//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::application::error::ApiError;
use crate::domain::anime::{AnimeDetail, AnimeSummary, Character, FavoriteStatus, Profile};
use crate::domain::search::SearchQuery;
use crate::domain::session::{
    Credentials, PasswordChangeBody, ProfileUpdate, Registration, SessionToken,
};
use crate::domain::view::{AuthChrome, Carousel, CharacterSection, DetailView, Flash};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 세션 토큰 영속 저장소 포트.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<SessionToken>>;
    fn save(&self, token: &SessionToken) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// 회원가입/로그인 엔드포인트.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// 성공 시 서버 안내 문구를 돌려준다.
    async fn register(&self, form: &Registration) -> ApiResult<Option<String>>;
    async fn login(&self, credentials: &Credentials) -> ApiResult<SessionToken>;
}

/// 공개 카탈로그 엔드포인트(검색/추천/트렌드/상세/캐릭터).
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn trending(&self) -> ApiResult<Vec<AnimeSummary>>;
    async fn search(
        &self,
        query: &SearchQuery,
        token: Option<&SessionToken>,
    ) -> ApiResult<Vec<AnimeSummary>>;
    async fn suggest(&self, query: &str) -> ApiResult<Vec<String>>;
    async fn anime(&self, mal_id: u64) -> ApiResult<AnimeDetail>;
    async fn characters(&self, mal_id: u64) -> ApiResult<Vec<Character>>;
}

/// 인증이 필요한 즐겨찾기 엔드포인트.
#[async_trait]
pub trait FavoritesApi: Send + Sync {
    async fn favorite_ids(&self, token: &SessionToken) -> ApiResult<Vec<u64>>;
    async fn favorite_status(&self, token: &SessionToken, mal_id: u64)
    -> ApiResult<FavoriteStatus>;
    async fn toggle_favorite(&self, token: &SessionToken, mal_id: u64)
    -> ApiResult<FavoriteStatus>;
}

/// 인증이 필요한 프로필 엔드포인트.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn profile(&self, token: &SessionToken) -> ApiResult<Profile>;
    async fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> ApiResult<Option<String>>;
    async fn change_password(
        &self,
        token: &SessionToken,
        body: &PasswordChangeBody<'_>,
    ) -> ApiResult<Option<String>>;
}

/// 뷰 모델을 터미널 텍스트로 바꾸는 렌더링 포트.
pub trait ViewRenderer: Send + Sync {
    fn render_results(&self, results: &[AnimeSummary]) -> String;
    fn render_carousel(&self, carousel: &Carousel) -> String;
    fn render_detail(&self, view: &DetailView) -> String;
    fn render_characters(&self, section: &CharacterSection) -> String;
    fn render_favorites(&self, favorites: &[AnimeDetail]) -> String;
    fn render_profile(&self, profile: &Profile) -> String;
    fn render_chrome(&self, chrome: &AuthChrome) -> String;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn flash(&self, flash: &Flash);
    fn raw(&self, line: &str);
}

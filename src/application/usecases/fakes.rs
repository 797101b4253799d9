//! 유스케이스 테스트용 인메모리 포트 구현.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::error::ApiError;
use crate::application::ports::{
    ApiResult, AuthApi, CatalogApi, FavoritesApi, ProfileApi, TokenStore,
};
use crate::domain::anime::{AnimeDetail, AnimeSummary, Character, FavoriteStatus, Profile};
use crate::domain::search::SearchQuery;
use crate::domain::session::{
    Credentials, PasswordChangeBody, ProfileUpdate, Registration, SessionToken,
};

/// 엔드포인트별 미리 정한 응답.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Status(u16, Option<&'static str>),
    Down,
}

impl<T> Default for Reply<T> {
    fn default() -> Self {
        Self::Down
    }
}

impl<T: Clone> Reply<T> {
    fn get(&self) -> ApiResult<T> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::Status(401, detail) => Err(ApiError::Unauthorized {
                detail: detail.map(str::to_string),
            }),
            Self::Status(status, detail) => Err(ApiError::Rejected {
                status: *status,
                detail: detail.map(str::to_string),
            }),
            Self::Down => Err(ApiError::Connection("connection refused".into())),
        }
    }
}

#[derive(Default)]
pub struct FakeApi {
    pub register: Reply<Option<String>>,
    pub login: Reply<String>,
    pub trending: Reply<Vec<AnimeSummary>>,
    pub search: Reply<Vec<AnimeSummary>>,
    pub suggest: Reply<Vec<String>>,
    pub anime: HashMap<u64, AnimeDetail>,
    pub characters: Reply<Vec<Character>>,
    pub favorite_ids: Reply<Vec<u64>>,
    pub favorite_status: Reply<bool>,
    pub toggle: Reply<bool>,
    pub profile: Reply<Profile>,
    pub update_profile: Reply<Option<String>>,
    pub change_password: Reply<Option<String>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn with_anime(mut self, detail: AnimeDetail) -> Self {
        self.anime.insert(detail.mal_id, detail);
        self
    }
}

#[async_trait]
impl AuthApi for FakeApi {
    async fn register(&self, form: &Registration) -> ApiResult<Option<String>> {
        self.record(format!("register {}", form.email));
        self.register.get()
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<SessionToken> {
        self.record(format!("login {}", credentials.email));
        let raw = self.login.get()?;
        SessionToken::new(&raw).ok_or_else(|| ApiError::InvalidResponse("empty token".into()))
    }
}

#[async_trait]
impl CatalogApi for FakeApi {
    async fn trending(&self) -> ApiResult<Vec<AnimeSummary>> {
        self.record("trending");
        self.trending.get()
    }

    async fn search(
        &self,
        query: &SearchQuery,
        token: Option<&SessionToken>,
    ) -> ApiResult<Vec<AnimeSummary>> {
        let auth = if token.is_some() { " (auth)" } else { "" };
        self.record(format!("search {:?}{auth}", query.query_pairs()));
        self.search.get()
    }

    async fn suggest(&self, query: &str) -> ApiResult<Vec<String>> {
        self.record(format!("suggest {query}"));
        self.suggest.get()
    }

    async fn anime(&self, mal_id: u64) -> ApiResult<AnimeDetail> {
        self.record(format!("anime {mal_id}"));
        self.anime
            .get(&mal_id)
            .cloned()
            .ok_or_else(|| ApiError::Rejected {
                status: 404,
                detail: Some("Anime not found.".into()),
            })
    }

    async fn characters(&self, mal_id: u64) -> ApiResult<Vec<Character>> {
        self.record(format!("characters {mal_id}"));
        self.characters.get()
    }
}

#[async_trait]
impl FavoritesApi for FakeApi {
    async fn favorite_ids(&self, _token: &SessionToken) -> ApiResult<Vec<u64>> {
        self.record("favorites");
        self.favorite_ids.get()
    }

    async fn favorite_status(
        &self,
        _token: &SessionToken,
        mal_id: u64,
    ) -> ApiResult<FavoriteStatus> {
        self.record(format!("favorite_status {mal_id}"));
        self.favorite_status
            .get()
            .map(|is_favorite| FavoriteStatus { is_favorite })
    }

    async fn toggle_favorite(
        &self,
        _token: &SessionToken,
        mal_id: u64,
    ) -> ApiResult<FavoriteStatus> {
        self.record(format!("toggle {mal_id}"));
        self.toggle.get().map(|is_favorite| FavoriteStatus { is_favorite })
    }
}

#[async_trait]
impl ProfileApi for FakeApi {
    async fn profile(&self, _token: &SessionToken) -> ApiResult<Profile> {
        self.record("profile");
        self.profile.get()
    }

    async fn update_profile(
        &self,
        _token: &SessionToken,
        update: &ProfileUpdate,
    ) -> ApiResult<Option<String>> {
        self.record(format!("update_profile {:?}", update.username));
        self.update_profile.get()
    }

    async fn change_password(
        &self,
        _token: &SessionToken,
        _body: &PasswordChangeBody<'_>,
    ) -> ApiResult<Option<String>> {
        self.record("change_password");
        self.change_password.get()
    }
}

#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<SessionToken>>,
}

impl MemoryTokenStore {
    pub fn signed_in(raw: &str) -> Self {
        Self {
            token: Mutex::new(SessionToken::new(raw)),
        }
    }

    pub fn current(&self) -> Option<SessionToken> {
        self.token.lock().unwrap().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<SessionToken>> {
        Ok(self.current())
    }

    fn save(&self, token: &SessionToken) -> Result<()> {
        *self.token.lock().unwrap() = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

pub fn summary(mal_id: u64, title: &str) -> AnimeSummary {
    AnimeSummary {
        mal_id,
        title: title.to_string(),
        synopsis: None,
        image_url: None,
    }
}

pub fn detail(mal_id: u64, title: &str) -> AnimeDetail {
    serde_json::from_value(serde_json::json!({ "mal_id": mal_id, "title": title }))
        .expect("minimal detail json")
}

//! reqwest 기반 백엔드 클라이언트.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use super::{LoginBody, MessageBody, avatar_mime, error_detail};
use crate::application::error::ApiError;
use crate::application::ports::{ApiResult, AuthApi, CatalogApi, FavoritesApi, ProfileApi};
use crate::domain::anime::{AnimeDetail, AnimeSummary, Character, FavoriteStatus, Profile};
use crate::domain::search::SearchQuery;
use crate::domain::session::{
    Credentials, PasswordChangeBody, ProfileUpdate, Registration, SessionToken,
};

pub struct HttpAnimeApi {
    client: Client,
    base: Url,
}

impl HttpAnimeApi {
    /// base URL과 요청 타임아웃으로 클라이언트를 만든다.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // 경로 접두사가 있는 base URL도 join이 유지되도록 끝에 `/`를 붙인다.
        let normalized = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base = Url::parse(&normalized)
            .with_context(|| format!("invalid server base_url: {base_url}"))?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("anishelf/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|err| ApiError::InvalidResponse(format!("bad endpoint {path}: {err}")))
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&SessionToken>,
    ) -> ApiResult<RequestBuilder> {
        let req = self.client.request(method, self.endpoint(path)?);
        Ok(match token {
            Some(token) => req.bearer_auth(token.as_str()),
            None => req,
        })
    }

    /// 전송 후 비정상 상태를 `ApiError`로 바꾼다.
    async fn send(&self, req: RequestBuilder, what: &str) -> ApiResult<Response> {
        let resp = req
            .send()
            .await
            .map_err(|err| ApiError::Connection(format!("{what}: {err}")))?;

        let status = resp.status();
        debug!(%status, what, "backend responded");
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let detail = error_detail(&body);
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized { detail });
        }
        Err(ApiError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, req: RequestBuilder, what: &str) -> ApiResult<T> {
        let resp = self.send(req, what).await?;
        let body = resp
            .text()
            .await
            .map_err(|err| ApiError::Connection(format!("{what}: {err}")))?;
        serde_json::from_str(&body)
            .map_err(|err| ApiError::InvalidResponse(format!("{what}: {err}")))
    }

    // 안내 문구만 필요한 응답. 본문이 JSON이 아니어도 성공으로 본다.
    async fn fetch_message(&self, req: RequestBuilder, what: &str) -> ApiResult<Option<String>> {
        let resp = self.send(req, what).await?;
        let body = resp.text().await.unwrap_or_default();
        Ok(serde_json::from_str::<MessageBody>(&body)
            .ok()
            .and_then(|m| m.message))
    }
}

#[async_trait]
impl AuthApi for HttpAnimeApi {
    async fn register(&self, form: &Registration) -> ApiResult<Option<String>> {
        let req = self.request(Method::POST, "/register", None)?.form(form);
        self.fetch_message(req, "register").await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<SessionToken> {
        let req = self.request(Method::POST, "/login", None)?.form(credentials);
        let body: LoginBody = self.fetch_json(req, "login").await?;
        SessionToken::new(&body.access_token)
            .ok_or_else(|| ApiError::InvalidResponse("login: empty access_token".into()))
    }
}

#[async_trait]
impl CatalogApi for HttpAnimeApi {
    async fn trending(&self) -> ApiResult<Vec<AnimeSummary>> {
        let req = self.request(Method::GET, "/api/anime/trending", None)?;
        self.fetch_json(req, "trending").await
    }

    async fn search(
        &self,
        query: &SearchQuery,
        token: Option<&SessionToken>,
    ) -> ApiResult<Vec<AnimeSummary>> {
        let req = self
            .request(Method::GET, "/api/anime/search", token)?
            .query(&query.query_pairs());
        self.fetch_json(req, "search").await
    }

    async fn suggest(&self, query: &str) -> ApiResult<Vec<String>> {
        let req = self
            .request(Method::GET, "/api/anime/suggest", None)?
            .query(&[("q", query)]);
        self.fetch_json(req, "suggest").await
    }

    async fn anime(&self, mal_id: u64) -> ApiResult<AnimeDetail> {
        let req = self.request(Method::GET, &format!("/api/anime/{mal_id}"), None)?;
        self.fetch_json(req, "anime detail").await
    }

    async fn characters(&self, mal_id: u64) -> ApiResult<Vec<Character>> {
        let req = self.request(Method::GET, &format!("/api/anime/{mal_id}/characters"), None)?;
        // 서버가 조회 실패 시 200 + null을 돌려줄 수 있다.
        let list: Option<Vec<Character>> = self.fetch_json(req, "characters").await?;
        Ok(list.unwrap_or_default())
    }
}

#[async_trait]
impl FavoritesApi for HttpAnimeApi {
    async fn favorite_ids(&self, token: &SessionToken) -> ApiResult<Vec<u64>> {
        let req = self.request(Method::GET, "/api/favorites", Some(token))?;
        self.fetch_json(req, "favorites").await
    }

    async fn favorite_status(
        &self,
        token: &SessionToken,
        mal_id: u64,
    ) -> ApiResult<FavoriteStatus> {
        let path = format!("/api/favorites/status/{mal_id}");
        let req = self.request(Method::GET, &path, Some(token))?;
        self.fetch_json(req, "favorite status").await
    }

    async fn toggle_favorite(
        &self,
        token: &SessionToken,
        mal_id: u64,
    ) -> ApiResult<FavoriteStatus> {
        let req = self
            .request(Method::POST, "/api/favorites/toggle", Some(token))?
            .json(&json!({ "mal_id": mal_id }));
        self.fetch_json(req, "favorite toggle").await
    }
}

#[async_trait]
impl ProfileApi for HttpAnimeApi {
    async fn profile(&self, token: &SessionToken) -> ApiResult<Profile> {
        let req = self.request(Method::GET, "/api/profile/me", Some(token))?;
        self.fetch_json(req, "profile").await
    }

    async fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> ApiResult<Option<String>> {
        let mut form = Form::new();
        if let Some(username) = update.username.as_deref().map(str::trim)
            && !username.is_empty()
        {
            form = form.text("username", username.to_string());
        }

        if let Some(path) = &update.avatar {
            let bytes = tokio::fs::read(path).await.map_err(|err| {
                ApiError::Input(format!("could not read avatar {}: {err}", path.display()))
            })?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "avatar".to_string());
            let part = Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(avatar_mime(path))
                .map_err(|err| ApiError::Input(format!("invalid avatar type: {err}")))?;
            form = form.part("avatar", part);
        }

        let req = self
            .request(Method::PUT, "/api/profile/update", Some(token))?
            .multipart(form);
        self.fetch_message(req, "profile update").await
    }

    async fn change_password(
        &self,
        token: &SessionToken,
        body: &PasswordChangeBody<'_>,
    ) -> ApiResult<Option<String>> {
        let req = self
            .request(Method::PUT, "/api/profile/password", Some(token))?
            .json(body);
        self.fetch_message(req, "password change").await
    }
}

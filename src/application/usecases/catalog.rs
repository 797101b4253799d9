//! 검색/자동완성/트렌드 캐러셀 유스케이스.

use tracing::{debug, warn};

use crate::application::ports::{CatalogApi, TokenStore};
use crate::application::usecases::auth::current_token;
use crate::domain::anime::AnimeSummary;
use crate::domain::policy;
use crate::domain::search::{SearchQuery, SuggestPolicy};
use crate::domain::view::{Carousel, Flash};

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// 검색어/필터가 모두 비어 네트워크 호출 없이 거절됨.
    Rejected(Flash),
    Results(Vec<AnimeSummary>),
    Failed(String),
}

/// 검색 폼 제출. 로그인 상태면 토큰을 함께 보낸다.
pub struct SearchUseCase<'a> {
    pub api: &'a dyn CatalogApi,
    pub token_store: &'a dyn TokenStore,
}

impl<'a> SearchUseCase<'a> {
    pub async fn execute(&self, query: &SearchQuery) -> SearchOutcome {
        if query.is_empty() {
            return SearchOutcome::Rejected(Flash::error(policy::EMPTY_SEARCH));
        }

        let token = current_token(self.token_store);
        match self.api.search(query, token.as_ref()).await {
            Ok(results) => {
                debug!(count = results.len(), "search completed");
                SearchOutcome::Results(results)
            }
            Err(err) => {
                warn!(error = %err, "search failed");
                SearchOutcome::Failed(policy::SEARCH_FAILED.to_string())
            }
        }
    }
}

/// 단발성 추천 조회(CLI `suggest`). 조건 미달이거나 실패하면 빈 목록.
pub struct SuggestUseCase<'a> {
    pub api: &'a dyn CatalogApi,
    pub policy: SuggestPolicy,
}

impl<'a> SuggestUseCase<'a> {
    pub async fn execute(&self, raw: &str) -> Vec<String> {
        let Some(query) = self.policy.accept(raw) else {
            return Vec::new();
        };
        match self.api.suggest(query).await {
            Ok(titles) => self.policy.limit(titles),
            Err(err) => {
                debug!(error = %err, "suggest failed");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum TrendingOutcome {
    Loaded(Carousel),
    Empty(String),
    Failed(String),
}

pub struct TrendingUseCase<'a> {
    pub api: &'a dyn CatalogApi,
    pub window: usize,
}

impl<'a> TrendingUseCase<'a> {
    pub async fn execute(&self) -> TrendingOutcome {
        match self.api.trending().await {
            Ok(items) if items.is_empty() => {
                TrendingOutcome::Empty(policy::TRENDING_EMPTY.to_string())
            }
            Ok(items) => TrendingOutcome::Loaded(Carousel::new(items, self.window)),
            Err(err) => {
                warn!(error = %err, "trending request failed");
                TrendingOutcome::Failed(policy::TRENDING_FAILED.to_string())
            }
        }
    }
}

//! 즐겨찾기 목록 유스케이스.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::application::ports::{CatalogApi, FavoritesApi, TokenStore};
use crate::application::usecases::auth::current_token;
use crate::domain::anime::AnimeDetail;
use crate::domain::policy;

#[derive(Debug, Clone)]
pub enum FavoritesOutcome {
    SignInRequired,
    Empty(String),
    Loaded(Vec<AnimeDetail>),
    Failed(String),
}

/// id 목록을 받은 뒤 각 상세를 동시에 조회하고 모두 끝날 때까지 기다린다.
/// 개별 조회 실패는 건너뛴다.
pub struct FavoritesUseCase<'a> {
    pub catalog: &'a dyn CatalogApi,
    pub favorites: &'a dyn FavoritesApi,
    pub token_store: &'a dyn TokenStore,
}

impl<'a> FavoritesUseCase<'a> {
    pub async fn execute(&self) -> FavoritesOutcome {
        let Some(token) = current_token(self.token_store) else {
            return FavoritesOutcome::SignInRequired;
        };

        let ids = match self.favorites.favorite_ids(&token).await {
            Ok(ids) => ids,
            Err(err) => {
                warn!(error = %err, "failed to load favorite ids");
                return FavoritesOutcome::Failed(policy::FAVORITES_FAILED.to_string());
            }
        };

        if ids.is_empty() {
            return FavoritesOutcome::Empty(policy::FAVORITES_EMPTY.to_string());
        }

        let lookups = ids.iter().map(|id| self.catalog.anime(*id));
        let results = join_all(lookups).await;

        let animes = ids
            .iter()
            .zip(results)
            .filter_map(|(id, result)| match result {
                Ok(anime) => Some(anime),
                Err(err) => {
                    debug!(mal_id = id, error = %err, "skipping unavailable favorite");
                    None
                }
            })
            .collect();

        FavoritesOutcome::Loaded(animes)
    }
}

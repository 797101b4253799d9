//! 애니메이션 상세(즐겨찾기 상태/캐릭터 포함)와 즐겨찾기 토글 유스케이스.

use tracing::{debug, warn};

use crate::application::ports::{CatalogApi, FavoritesApi, TokenStore};
use crate::application::usecases::auth::current_token;
use crate::domain::policy;
use crate::domain::session::SessionToken;
use crate::domain::view::{CharacterSection, DetailView, FavoriteButton, FavoriteControl};

#[derive(Debug, Clone)]
pub enum DetailOutcome {
    Loaded(DetailView),
    Failed(String),
}

/// 상세 페이지 로딩. 상세 → (로그인 시) 즐겨찾기 상태를 조회한다.
/// 캐릭터는 본문 표시 후 `load_characters`로 따로 채운다.
pub struct LoadDetailUseCase<'a> {
    pub catalog: &'a dyn CatalogApi,
    pub favorites: &'a dyn FavoritesApi,
    pub token_store: &'a dyn TokenStore,
}

impl<'a> LoadDetailUseCase<'a> {
    pub async fn execute(&self, mal_id: u64) -> DetailOutcome {
        let anime = match self.catalog.anime(mal_id).await {
            Ok(anime) => anime,
            Err(err) => {
                warn!(mal_id, error = %err, "failed to load anime detail");
                return DetailOutcome::Failed(policy::DETAIL_FAILED.to_string());
            }
        };

        let favorite = match current_token(self.token_store) {
            Some(token) => FavoriteControl::Button(self.favorite_button(&token, mal_id).await),
            None => FavoriteControl::SignInPrompt,
        };

        DetailOutcome::Loaded(DetailView {
            anime,
            favorite,
            characters: CharacterSection::Pending,
        })
    }

    pub async fn load_characters(&self, mal_id: u64) -> CharacterSection {
        match self.catalog.characters(mal_id).await {
            Ok(list) => CharacterSection::Loaded(list),
            Err(err) => {
                warn!(mal_id, error = %err, "failed to load characters");
                CharacterSection::Unavailable
            }
        }
    }

    // 상태 조회 실패는 "즐겨찾기 아님"으로 본다.
    async fn favorite_button(&self, token: &SessionToken, mal_id: u64) -> FavoriteButton {
        match self.favorites.favorite_status(token, mal_id).await {
            Ok(status) => FavoriteButton::new(status.is_favorite),
            Err(err) => {
                debug!(mal_id, error = %err, "favorite status unavailable");
                FavoriteButton::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Toggled(FavoriteButton),
    SignInRequired,
    Failed(String),
}

/// 즐겨찾기 토글. 버튼은 서버가 돌려준 상태로만 갱신한다.
pub struct ToggleFavoriteUseCase<'a> {
    pub favorites: &'a dyn FavoritesApi,
    pub token_store: &'a dyn TokenStore,
}

impl<'a> ToggleFavoriteUseCase<'a> {
    pub async fn execute(&self, mal_id: u64, mut button: FavoriteButton) -> ToggleOutcome {
        let Some(token) = current_token(self.token_store) else {
            return ToggleOutcome::SignInRequired;
        };

        match self.favorites.toggle_favorite(&token, mal_id).await {
            Ok(status) => {
                button.apply(status);
                ToggleOutcome::Toggled(button)
            }
            Err(err) if err.is_connection() => {
                warn!(mal_id, error = %err, "favorite toggle failed");
                ToggleOutcome::Failed(policy::CONNECTION_ERROR.to_string())
            }
            Err(err) => {
                warn!(mal_id, error = %err, "favorite toggle rejected");
                ToggleOutcome::Failed(err.detail().unwrap_or(&err.to_string()).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::fakes::{FakeApi, MemoryTokenStore, Reply, detail};
    use crate::domain::anime::Character;
    use crate::domain::view::{ADD_FAVORITE_LABEL, FAVORITE_STYLE, REMOVE_FAVORITE_LABEL};

    fn character(name: &str) -> Character {
        Character {
            name: name.to_string(),
            image_url: None,
            role: "Main".into(),
        }
    }

    #[tokio::test]
    async fn anonymous_detail_shows_sign_in_prompt_without_status_call() {
        let api = FakeApi {
            characters: Reply::Ok(vec![character("Spike")]),
            ..Default::default()
        }
        .with_anime(detail(1, "Cowboy Bebop"));
        let store = MemoryTokenStore::default();
        let usecase = LoadDetailUseCase {
            catalog: &api,
            favorites: &api,
            token_store: &store,
        };

        let DetailOutcome::Loaded(view) = usecase.execute(1).await else {
            panic!("detail expected");
        };
        assert_eq!(view.favorite, FavoriteControl::SignInPrompt);
        assert_eq!(view.characters, CharacterSection::Pending);
        assert_eq!(api.calls(), vec!["anime 1"]);

        assert_eq!(
            usecase.load_characters(1).await,
            CharacterSection::Loaded(vec![character("Spike")])
        );
        assert_eq!(api.calls(), vec!["anime 1", "characters 1"]);
    }

    #[tokio::test]
    async fn failed_characters_leave_section_unavailable() {
        let api = FakeApi {
            characters: Reply::Down,
            ..Default::default()
        };
        let usecase = LoadDetailUseCase {
            catalog: &api,
            favorites: &api,
            token_store: &MemoryTokenStore::default(),
        };
        assert_eq!(usecase.load_characters(3).await, CharacterSection::Unavailable);
    }

    #[tokio::test]
    async fn signed_in_detail_reflects_favorite_status() {
        let api = FakeApi {
            favorite_status: Reply::Ok(true),
            characters: Reply::Down,
            ..Default::default()
        }
        .with_anime(detail(1, "Cowboy Bebop"));
        let DetailOutcome::Loaded(view) = (LoadDetailUseCase {
            catalog: &api,
            favorites: &api,
            token_store: &MemoryTokenStore::signed_in("jwt"),
        })
        .execute(1)
        .await
        else {
            panic!("detail expected");
        };

        assert_eq!(view.favorite, FavoriteControl::Button(FavoriteButton::new(true)));
        assert!(!api.calls().iter().any(|c| c.starts_with("characters")));
    }

    #[tokio::test]
    async fn failed_status_counts_as_not_favorite() {
        let api = FakeApi {
            favorite_status: Reply::Status(401, Some("expired")),
            characters: Reply::Ok(Vec::new()),
            ..Default::default()
        }
        .with_anime(detail(7, "Mushishi"));
        let DetailOutcome::Loaded(view) = (LoadDetailUseCase {
            catalog: &api,
            favorites: &api,
            token_store: &MemoryTokenStore::signed_in("jwt"),
        })
        .execute(7)
        .await
        else {
            panic!("detail expected");
        };
        assert_eq!(view.favorite, FavoriteControl::Button(FavoriteButton::new(false)));
    }

    #[tokio::test]
    async fn missing_anime_fails_whole_page() {
        let api = FakeApi::default();
        let outcome = LoadDetailUseCase {
            catalog: &api,
            favorites: &api,
            token_store: &MemoryTokenStore::default(),
        }
        .execute(404)
        .await;
        assert!(matches!(outcome, DetailOutcome::Failed(ref m) if m == policy::DETAIL_FAILED));
    }

    #[tokio::test]
    async fn toggle_follows_server_boolean() {
        let store = MemoryTokenStore::signed_in("jwt");
        let added = FakeApi {
            toggle: Reply::Ok(true),
            ..Default::default()
        };
        let ToggleOutcome::Toggled(button) = (ToggleFavoriteUseCase {
            favorites: &added,
            token_store: &store,
        })
        .execute(5, FavoriteButton::new(false))
        .await
        else {
            panic!("toggle expected");
        };
        assert_eq!(button.label(), REMOVE_FAVORITE_LABEL);
        assert_eq!(button.style(), Some(FAVORITE_STYLE));

        let removed = FakeApi {
            toggle: Reply::Ok(false),
            ..Default::default()
        };
        let ToggleOutcome::Toggled(button) = (ToggleFavoriteUseCase {
            favorites: &removed,
            token_store: &store,
        })
        .execute(5, button)
        .await
        else {
            panic!("toggle expected");
        };
        assert_eq!(button.label(), ADD_FAVORITE_LABEL);
        assert_eq!(button.style(), None);
    }

    #[tokio::test]
    async fn toggle_requires_token() {
        let api = FakeApi::default();
        let outcome = ToggleFavoriteUseCase {
            favorites: &api,
            token_store: &MemoryTokenStore::default(),
        }
        .execute(5, FavoriteButton::default())
        .await;
        assert_eq!(outcome, ToggleOutcome::SignInRequired);
        assert!(api.calls().is_empty());
    }
}

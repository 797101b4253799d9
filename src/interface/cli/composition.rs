//! 애플리케이션 조립(composition root) 모듈.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use crate::application::autocomplete::{Autocomplete, SuggestionUpdate};
use crate::application::config::Config;
use crate::application::ports::{
    CatalogApi, ConfigRepository, Reporter, TokenStore, ViewRenderer,
};
use crate::application::usecases::auth::{LoginUseCase, LogoutUseCase, RegisterUseCase};
use crate::application::usecases::catalog::{SearchUseCase, SuggestUseCase, TrendingUseCase};
use crate::application::usecases::detail::{LoadDetailUseCase, ToggleFavoriteUseCase};
use crate::application::usecases::favorites::FavoritesUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::profile::{
    ChangePasswordUseCase, LoadProfileUseCase, UpdateProfileUseCase,
};
use crate::infrastructure::adapters::{ConsoleReporter, JsonConfigRepository, TextRenderer};
use crate::infrastructure::api::HttpAnimeApi;
use crate::infrastructure::config::token_path;
use crate::infrastructure::session::FileTokenStore;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config: Config,
    config_repo: JsonConfigRepository,
    api: Arc<HttpAnimeApi>,
    token_store: FileTokenStore,
    renderer: TextRenderer,
    reporter: ConsoleReporter,
}

impl AppComposition {
    /// 설정을 읽어 HTTP 클라이언트와 토큰 저장소를 준비한다.
    pub fn load() -> Result<Self> {
        let config_repo = JsonConfigRepository;
        let config = config_repo.load()?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let api = HttpAnimeApi::new(&config.base_url(), config.timeout())?;
        let token_store = FileTokenStore::new(token_path(&config));
        debug!(
            base_url = api.base_url(),
            token_path = %token_store.path().display(),
            "composition ready"
        );

        Ok(Self {
            renderer: TextRenderer::new(config.synopsis_preview_chars()),
            reporter: ConsoleReporter::new(),
            config_repo: JsonConfigRepository,
            api: Arc::new(api),
            token_store,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn renderer(&self) -> &dyn ViewRenderer {
        &self.renderer
    }

    pub fn reporter(&self) -> &dyn Reporter {
        &self.reporter
    }

    pub fn token_store(&self) -> &dyn TokenStore {
        &self.token_store
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    /// 검색창 자동완성 컨트롤러와 결과 수신 채널을 만든다.
    pub fn autocomplete(&self) -> (Autocomplete, UnboundedReceiver<SuggestionUpdate>) {
        let api: Arc<dyn CatalogApi> = self.api.clone();
        Autocomplete::new(api, self.config.suggest_policy(), self.config.debounce())
    }

    pub fn login_usecase(&self) -> LoginUseCase<'_> {
        LoginUseCase {
            api: self.api.as_ref(),
            token_store: &self.token_store,
            redirect_ms: self.config.login_redirect_ms(),
        }
    }

    pub fn register_usecase(&self) -> RegisterUseCase<'_> {
        RegisterUseCase {
            api: self.api.as_ref(),
            redirect_ms: self.config.register_redirect_ms(),
        }
    }

    pub fn logout_usecase(&self) -> LogoutUseCase<'_> {
        LogoutUseCase {
            token_store: &self.token_store,
        }
    }

    pub fn search_usecase(&self) -> SearchUseCase<'_> {
        SearchUseCase {
            api: self.api.as_ref(),
            token_store: &self.token_store,
        }
    }

    pub fn suggest_usecase(&self) -> SuggestUseCase<'_> {
        SuggestUseCase {
            api: self.api.as_ref(),
            policy: self.config.suggest_policy(),
        }
    }

    pub fn trending_usecase(&self) -> TrendingUseCase<'_> {
        TrendingUseCase {
            api: self.api.as_ref(),
            window: self.config.carousel_window(),
        }
    }

    pub fn detail_usecase(&self) -> LoadDetailUseCase<'_> {
        LoadDetailUseCase {
            catalog: self.api.as_ref(),
            favorites: self.api.as_ref(),
            token_store: &self.token_store,
        }
    }

    pub fn toggle_favorite_usecase(&self) -> ToggleFavoriteUseCase<'_> {
        ToggleFavoriteUseCase {
            favorites: self.api.as_ref(),
            token_store: &self.token_store,
        }
    }

    pub fn favorites_usecase(&self) -> FavoritesUseCase<'_> {
        FavoritesUseCase {
            catalog: self.api.as_ref(),
            favorites: self.api.as_ref(),
            token_store: &self.token_store,
        }
    }

    pub fn load_profile_usecase(&self) -> LoadProfileUseCase<'_> {
        LoadProfileUseCase {
            api: self.api.as_ref(),
            token_store: &self.token_store,
        }
    }

    pub fn update_profile_usecase(&self) -> UpdateProfileUseCase<'_> {
        UpdateProfileUseCase {
            api: self.api.as_ref(),
            token_store: &self.token_store,
            return_ms: self.config.profile_return_ms(),
        }
    }

    pub fn change_password_usecase(&self) -> ChangePasswordUseCase<'_> {
        ChangePasswordUseCase {
            api: self.api.as_ref(),
            token_store: &self.token_store,
            return_ms: self.config.profile_return_ms(),
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }
}

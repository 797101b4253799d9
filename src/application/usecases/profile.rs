//! 프로필 조회/수정과 비밀번호 변경 유스케이스.

use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use crate::application::error::ApiError;
use crate::application::ports::{ProfileApi, TokenStore};
use crate::application::usecases::auth::{LogoutUseCase, current_token};
use crate::domain::anime::Profile;
use crate::domain::policy;
use crate::domain::session::{PasswordChange, ProfileUpdate};
use crate::domain::view::{Flash, Redirect};

#[derive(Debug, Clone)]
pub enum ProfileOutcome {
    Anonymous,
    Loaded(Profile),
    /// 401로 토큰이 폐기되어 로그아웃 이동이 필요함.
    SignedOut(Redirect),
    Unavailable,
}

/// 사이드바 프로필 조회. 401이면 강제 로그아웃한다.
pub struct LoadProfileUseCase<'a> {
    pub api: &'a dyn ProfileApi,
    pub token_store: &'a dyn TokenStore,
}

impl<'a> LoadProfileUseCase<'a> {
    pub async fn execute(&self) -> Result<ProfileOutcome> {
        let Some(token) = current_token(self.token_store) else {
            return Ok(ProfileOutcome::Anonymous);
        };

        match self.api.profile(&token).await {
            Ok(profile) => Ok(ProfileOutcome::Loaded(profile)),
            Err(err) if err.is_unauthorized() => {
                info!("session rejected by server, signing out");
                let redirect = LogoutUseCase {
                    token_store: self.token_store,
                }
                .execute()?;
                Ok(ProfileOutcome::SignedOut(redirect))
            }
            Err(err) => {
                warn!(error = %err, "failed to load profile");
                Ok(ProfileOutcome::Unavailable)
            }
        }
    }
}

/// 프로필/비밀번호 폼 제출 결과.
#[derive(Debug, Clone)]
pub struct FormOutcome {
    pub flash: Flash,
    /// 성공 시 이 시간 후 검색 화면으로 돌아간다.
    pub return_after: Option<Duration>,
}

impl FormOutcome {
    fn failed(text: impl Into<String>) -> Self {
        Self {
            flash: Flash::error(text),
            return_after: None,
        }
    }

    fn succeeded(text: &str, return_ms: u64) -> Self {
        Self {
            flash: Flash::success(text),
            return_after: Some(Duration::from_millis(return_ms)),
        }
    }

    pub fn is_success(&self) -> bool {
        !self.flash.is_error()
    }
}

/// 프로필 수정(multipart). 성공하면 호출 측에서 프로필을 다시 읽는다.
pub struct UpdateProfileUseCase<'a> {
    pub api: &'a dyn ProfileApi,
    pub token_store: &'a dyn TokenStore,
    pub return_ms: u64,
}

impl<'a> UpdateProfileUseCase<'a> {
    pub async fn execute(&self, update: &ProfileUpdate) -> FormOutcome {
        let Some(token) = current_token(self.token_store) else {
            return FormOutcome::failed(policy::SIGN_IN_REQUIRED);
        };

        match self.api.update_profile(&token, update).await {
            Ok(_) => {
                info!("profile updated");
                FormOutcome::succeeded(policy::PROFILE_UPDATED, self.return_ms)
            }
            Err(err) => {
                warn!(error = %err, "profile update failed");
                let text = match &err {
                    ApiError::Input(msg) => msg.clone(),
                    other => other
                        .detail()
                        .unwrap_or(policy::PROFILE_UPDATE_FAILED)
                        .to_string(),
                };
                FormOutcome::failed(text)
            }
        }
    }
}

/// 비밀번호 변경. 확인값이 다르면 네트워크 호출 없이 거절한다.
pub struct ChangePasswordUseCase<'a> {
    pub api: &'a dyn ProfileApi,
    pub token_store: &'a dyn TokenStore,
    pub return_ms: u64,
}

impl<'a> ChangePasswordUseCase<'a> {
    pub async fn execute(&self, form: &PasswordChange) -> FormOutcome {
        let Some(body) = form.body() else {
            return FormOutcome::failed(policy::PASSWORD_MISMATCH);
        };
        let Some(token) = current_token(self.token_store) else {
            return FormOutcome::failed(policy::SIGN_IN_REQUIRED);
        };

        match self.api.change_password(&token, &body).await {
            Ok(_) => FormOutcome::succeeded(policy::PASSWORD_CHANGED, self.return_ms),
            Err(err) if err.is_connection() => {
                warn!(error = %err, "password change failed");
                FormOutcome::failed(policy::CONNECTION_ERROR)
            }
            Err(err) => {
                FormOutcome::failed(err.detail().unwrap_or(policy::PASSWORD_CHANGE_FAILED))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::fakes::{FakeApi, MemoryTokenStore, Reply};
    use crate::domain::view::Page;

    fn profile() -> Profile {
        Profile {
            username: "ana".into(),
            email: Some("ana@example.com".into()),
            avatar_url: Some("/static/images/default_avatar.png".into()),
        }
    }

    #[tokio::test]
    async fn unauthorized_profile_forces_logout() {
        let api = FakeApi {
            profile: Reply::Status(401, Some("No se pudieron validar las credenciales")),
            ..Default::default()
        };
        let store = MemoryTokenStore::signed_in("expired-jwt");
        let outcome = LoadProfileUseCase {
            api: &api,
            token_store: &store,
        }
        .execute()
        .await
        .unwrap();

        let ProfileOutcome::SignedOut(redirect) = outcome else {
            panic!("forced logout expected");
        };
        assert!(store.current().is_none());
        assert_eq!(redirect.to, Page::Home { logged_out: true });
    }

    #[tokio::test]
    async fn other_profile_errors_keep_session() {
        let api = FakeApi {
            profile: Reply::Status(404, Some("Usuario no encontrado.")),
            ..Default::default()
        };
        let store = MemoryTokenStore::signed_in("jwt");
        let outcome = LoadProfileUseCase {
            api: &api,
            token_store: &store,
        }
        .execute()
        .await
        .unwrap();

        assert!(matches!(outcome, ProfileOutcome::Unavailable));
        assert!(store.current().is_some());
    }

    #[tokio::test]
    async fn anonymous_profile_makes_no_request() {
        let api = FakeApi {
            profile: Reply::Ok(profile()),
            ..Default::default()
        };
        let outcome = LoadProfileUseCase {
            api: &api,
            token_store: &MemoryTokenStore::default(),
        }
        .execute()
        .await
        .unwrap();
        assert!(matches!(outcome, ProfileOutcome::Anonymous));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn password_mismatch_is_rejected_locally() {
        let api = FakeApi {
            change_password: Reply::Ok(None),
            ..Default::default()
        };
        let outcome = ChangePasswordUseCase {
            api: &api,
            token_store: &MemoryTokenStore::signed_in("jwt"),
            return_ms: 1500,
        }
        .execute(&PasswordChange {
            current: "Old12345".into(),
            new: "New12345".into(),
            confirm: "Other123".into(),
        })
        .await;

        assert_eq!(outcome.flash.text, policy::PASSWORD_MISMATCH);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn password_change_success_returns_to_search() {
        let api = FakeApi {
            change_password: Reply::Ok(Some("Contraseña actualizada.".into())),
            ..Default::default()
        };
        let outcome = ChangePasswordUseCase {
            api: &api,
            token_store: &MemoryTokenStore::signed_in("jwt"),
            return_ms: 1500,
        }
        .execute(&PasswordChange {
            current: "Old12345".into(),
            new: "New12345".into(),
            confirm: "New12345".into(),
        })
        .await;

        assert!(outcome.is_success());
        assert_eq!(outcome.flash.text, policy::PASSWORD_CHANGED);
        assert_eq!(outcome.return_after, Some(Duration::from_millis(1500)));
    }

    #[tokio::test]
    async fn rejected_password_shows_detail() {
        let api = FakeApi {
            change_password: Reply::Status(400, Some("Contraseña actual incorrecta.")),
            ..Default::default()
        };
        let outcome = ChangePasswordUseCase {
            api: &api,
            token_store: &MemoryTokenStore::signed_in("jwt"),
            return_ms: 1500,
        }
        .execute(&PasswordChange {
            current: "wrong".into(),
            new: "New12345".into(),
            confirm: "New12345".into(),
        })
        .await;
        assert_eq!(outcome.flash.text, "Contraseña actual incorrecta.");
        assert_eq!(outcome.return_after, None);
    }

    #[tokio::test]
    async fn profile_update_uses_fallback_without_detail() {
        let api = FakeApi {
            update_profile: Reply::Status(500, None),
            ..Default::default()
        };
        let outcome = UpdateProfileUseCase {
            api: &api,
            token_store: &MemoryTokenStore::signed_in("jwt"),
            return_ms: 1500,
        }
        .execute(&ProfileUpdate {
            username: Some("ana2".into()),
            avatar: None,
        })
        .await;
        assert_eq!(outcome.flash.text, policy::PROFILE_UPDATE_FAILED);
    }

    #[tokio::test]
    async fn profile_update_success() {
        let api = FakeApi {
            update_profile: Reply::Ok(Some("Perfil actualizado.".into())),
            ..Default::default()
        };
        let outcome = UpdateProfileUseCase {
            api: &api,
            token_store: &MemoryTokenStore::signed_in("jwt"),
            return_ms: 1500,
        }
        .execute(&ProfileUpdate::default())
        .await;
        assert!(outcome.is_success());
        assert_eq!(outcome.flash.text, policy::PROFILE_UPDATED);
    }
}

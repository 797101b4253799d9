//! 회원가입/로그인/로그아웃 유스케이스.

use anyhow::Result;
use tracing::{info, warn};

use crate::application::ports::{AuthApi, TokenStore};
use crate::domain::policy;
use crate::domain::session::{Credentials, Registration, SessionToken};
use crate::domain::view::{Flash, Page, Redirect};

/// 폼 제출 결과: 표시할 메시지와 예약된 이동.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub flash: Flash,
    pub redirect: Option<Redirect>,
}

impl AuthOutcome {
    fn failed(text: String) -> Self {
        Self {
            flash: Flash::error(text),
            redirect: None,
        }
    }
}

/// 저장된 토큰을 읽는다. 저장소 오류는 비로그인 상태로 취급한다.
pub fn current_token(token_store: &dyn TokenStore) -> Option<SessionToken> {
    match token_store.load() {
        Ok(token) => token,
        Err(err) => {
            warn!(error = %format!("{err:#}"), "failed to read stored session token");
            None
        }
    }
}

/// 로그인 폼 제출. 성공 시 토큰을 저장하고 홈으로 이동을 예약한다.
pub struct LoginUseCase<'a> {
    pub api: &'a dyn AuthApi,
    pub token_store: &'a dyn TokenStore,
    pub redirect_ms: u64,
}

impl<'a> LoginUseCase<'a> {
    pub async fn execute(&self, credentials: &Credentials) -> Result<AuthOutcome> {
        let token = match self.api.login(credentials).await {
            Ok(token) => token,
            Err(err) if err.is_connection() => {
                warn!(error = %err, "login request failed");
                return Ok(AuthOutcome::failed(policy::CONNECTION_ERROR.to_string()));
            }
            Err(err) => return Ok(AuthOutcome::failed(policy::login_error(err.detail()))),
        };

        self.token_store.save(&token)?;
        info!(email = %credentials.email, "signed in");

        Ok(AuthOutcome {
            flash: Flash::success(policy::LOGIN_SUCCESS),
            redirect: Some(Redirect::after_ms(Page::home(), self.redirect_ms)),
        })
    }
}

/// 회원가입 폼 제출. 성공 시 로그인 화면으로 이동을 예약한다.
pub struct RegisterUseCase<'a> {
    pub api: &'a dyn AuthApi,
    pub redirect_ms: u64,
}

impl<'a> RegisterUseCase<'a> {
    pub async fn execute(&self, form: &Registration) -> Result<AuthOutcome> {
        match self.api.register(form).await {
            Ok(message) => Ok(AuthOutcome {
                flash: Flash::success(policy::register_success(message.as_deref())),
                redirect: Some(Redirect::after_ms(Page::Login, self.redirect_ms)),
            }),
            Err(err) if err.is_connection() => {
                warn!(error = %err, "register request failed");
                Ok(AuthOutcome::failed(policy::CONNECTION_ERROR.to_string()))
            }
            Err(err) => Ok(AuthOutcome::failed(policy::register_error(err.detail()))),
        }
    }
}

/// 저장된 토큰을 지우고 로그아웃 표시와 함께 홈으로 보낸다.
pub struct LogoutUseCase<'a> {
    pub token_store: &'a dyn TokenStore,
}

impl<'a> LogoutUseCase<'a> {
    pub fn execute(&self) -> Result<Redirect> {
        self.token_store.clear()?;
        Ok(Redirect::now(Page::Home { logged_out: true }))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::application::usecases::fakes::{FakeApi, MemoryTokenStore, Reply};

    fn creds() -> Credentials {
        Credentials {
            email: "ana@example.com".into(),
            password: "Secret123".into(),
        }
    }

    #[tokio::test]
    async fn login_stores_token_and_redirects_home() {
        let api = FakeApi {
            login: Reply::Ok("jwt-1".into()),
            ..Default::default()
        };
        let store = MemoryTokenStore::default();
        let outcome = LoginUseCase {
            api: &api,
            token_store: &store,
            redirect_ms: 1000,
        }
        .execute(&creds())
        .await
        .unwrap();

        assert_eq!(store.current().unwrap().as_str(), "jwt-1");
        assert!(!outcome.flash.is_error());
        let redirect = outcome.redirect.unwrap();
        assert_eq!(redirect.to, Page::home());
        assert_eq!(redirect.after, Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn rejected_login_shows_server_detail() {
        let api = FakeApi {
            login: Reply::Status(401, Some("Credenciales inválidas")),
            ..Default::default()
        };
        let store = MemoryTokenStore::default();
        let outcome = LoginUseCase {
            api: &api,
            token_store: &store,
            redirect_ms: 1000,
        }
        .execute(&creds())
        .await
        .unwrap();

        assert!(store.current().is_none());
        assert!(outcome.redirect.is_none());
        assert_eq!(outcome.flash.text, "Access error: Credenciales inválidas");
    }

    #[tokio::test]
    async fn login_without_detail_uses_generic_fallback() {
        let api = FakeApi {
            login: Reply::Status(500, None),
            ..Default::default()
        };
        let outcome = LoginUseCase {
            api: &api,
            token_store: &MemoryTokenStore::default(),
            redirect_ms: 1000,
        }
        .execute(&creds())
        .await
        .unwrap();
        assert_eq!(outcome.flash.text, "Access error: Invalid credentials.");
    }

    #[tokio::test]
    async fn unreachable_server_shows_connection_error() {
        let api = FakeApi::default();
        let outcome = RegisterUseCase {
            api: &api,
            redirect_ms: 2000,
        }
        .execute(&Registration {
            email: "ana@example.com".into(),
            username: "ana".into(),
            password: "Secret123".into(),
        })
        .await
        .unwrap();
        assert_eq!(outcome.flash.text, policy::CONNECTION_ERROR);
    }

    #[tokio::test]
    async fn register_success_redirects_to_login() {
        let api = FakeApi {
            register: Reply::Ok(Some("Registro exitoso.".into())),
            ..Default::default()
        };
        let outcome = RegisterUseCase {
            api: &api,
            redirect_ms: 2000,
        }
        .execute(&Registration {
            email: "ana@example.com".into(),
            username: "ana".into(),
            password: "Secret123".into(),
        })
        .await
        .unwrap();

        assert_eq!(outcome.flash.text, "Registro exitoso. Redirecting...");
        assert_eq!(outcome.redirect.unwrap().to, Page::Login);
    }

    #[test]
    fn logout_clears_token_with_marker() {
        let store = MemoryTokenStore::signed_in("jwt-1");
        let redirect = LogoutUseCase {
            token_store: &store,
        }
        .execute()
        .unwrap();

        assert!(store.current().is_none());
        assert_eq!(redirect.to, Page::Home { logged_out: true });
    }
}

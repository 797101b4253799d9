//! 서브커맨드 단발 실행. 사용자에게 보여줄 실패는 오류로 돌려 종료 코드 1이 되게 한다.

use anyhow::{Result, bail};

use crate::application::usecases::auth::current_token;
use crate::application::usecases::catalog::{SearchOutcome, TrendingOutcome};
use crate::application::usecases::detail::{DetailOutcome, ToggleOutcome};
use crate::application::usecases::favorites::FavoritesOutcome;
use crate::application::usecases::profile::ProfileOutcome;
use crate::domain::policy;
use crate::domain::view::{FavoriteButton, Flash, Layout, update_auth_buttons};
use crate::infrastructure::render::render_favorite_button;
use crate::interface::cli::command::CliAction;
use crate::interface::cli::composition::AppComposition;

pub async fn run_action(app: &AppComposition, action: CliAction) -> Result<()> {
    let renderer = app.renderer();
    let reporter = app.reporter();

    match action {
        CliAction::Interactive => bail!("interactive shell is started by the binary"),
        CliAction::InspectConfig => {
            reporter.raw(&app.inspect_config_usecase().execute()?);
        }
        CliAction::Login(credentials) => {
            let outcome = app.login_usecase().execute(&credentials).await?;
            report_flash(app, &outcome.flash)?;
        }
        CliAction::Register(form) => {
            let outcome = app.register_usecase().execute(&form).await?;
            report_flash(app, &outcome.flash)?;
        }
        CliAction::Logout => {
            app.logout_usecase().execute()?;
            reporter.flash(&Flash::success(policy::SIGNED_OUT));
        }
        CliAction::Search(query) => match app.search_usecase().execute(&query).await {
            SearchOutcome::Rejected(flash) => report_flash(app, &flash)?,
            SearchOutcome::Results(results) => reporter.raw(&renderer.render_results(&results)),
            SearchOutcome::Failed(message) => bail!(message),
        },
        CliAction::Suggest(text) => {
            for title in app.suggest_usecase().execute(&text).await {
                reporter.raw(&title);
            }
        }
        CliAction::Trending { page } => match app.trending_usecase().execute().await {
            TrendingOutcome::Loaded(mut carousel) => {
                for _ in 1..page {
                    carousel.next();
                }
                reporter.raw(&renderer.render_carousel(&carousel));
            }
            TrendingOutcome::Empty(message) | TrendingOutcome::Failed(message) => bail!(message),
        },
        CliAction::Show(mal_id) => {
            let signed_in = current_token(app.token_store()).is_some();
            let chrome = update_auth_buttons(&Layout::detail(), signed_in);
            reporter.raw(&renderer.render_chrome(&chrome));
            let usecase = app.detail_usecase();
            match usecase.execute(mal_id).await {
                DetailOutcome::Loaded(view) => {
                    reporter.raw(&renderer.render_detail(&view));
                    let characters = usecase.load_characters(mal_id).await;
                    reporter.raw(&format!("\n{}", renderer.render_characters(&characters)));
                }
                DetailOutcome::Failed(message) => bail!(message),
            }
        }
        CliAction::ToggleFavorite(mal_id) => {
            // 현재 상태는 서버 응답으로만 정해지므로 상세를 먼저 읽지 않는다.
            match app
                .toggle_favorite_usecase()
                .execute(mal_id, FavoriteButton::default())
                .await
            {
                ToggleOutcome::Toggled(button) => {
                    let text = if button.is_favorite() {
                        format!("#{mal_id} added to favorites.")
                    } else {
                        format!("#{mal_id} removed from favorites.")
                    };
                    reporter.flash(&Flash::success(text));
                    reporter.raw(&render_favorite_button(&button));
                }
                ToggleOutcome::SignInRequired => bail!(policy::SIGN_IN_FOR_FAVORITES),
                ToggleOutcome::Failed(message) => bail!(message),
            }
        }
        CliAction::Favorites => match app.favorites_usecase().execute().await {
            FavoritesOutcome::SignInRequired => bail!(policy::SIGN_IN_REQUIRED),
            FavoritesOutcome::Empty(message) => reporter.raw(&message),
            FavoritesOutcome::Loaded(list) => reporter.raw(&renderer.render_favorites(&list)),
            FavoritesOutcome::Failed(message) => bail!(message),
        },
        CliAction::Profile => match app.load_profile_usecase().execute().await? {
            ProfileOutcome::Anonymous => bail!(policy::SIGN_IN_REQUIRED),
            ProfileOutcome::Loaded(profile) => reporter.raw(&renderer.render_profile(&profile)),
            ProfileOutcome::SignedOut(_) => {
                reporter.flash(&Flash::error(policy::SIGNED_OUT));
                bail!("session expired, sign in again");
            }
            ProfileOutcome::Unavailable => bail!("could not load profile"),
        },
        CliAction::ProfileEdit(update) => {
            let outcome = app.update_profile_usecase().execute(&update).await;
            report_flash(app, &outcome.flash)?;
        }
        CliAction::Password(form) => {
            let outcome = app.change_password_usecase().execute(&form).await;
            report_flash(app, &outcome.flash)?;
        }
    }

    Ok(())
}

fn report_flash(app: &AppComposition, flash: &Flash) -> Result<()> {
    if flash.is_error() {
        bail!(flash.text.clone());
    }
    app.reporter().flash(flash);
    Ok(())
}

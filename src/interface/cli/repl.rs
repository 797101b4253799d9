//! `anishelf` 대화형 쉘(REPL) 인터페이스.
//!
//! 셸은 현재 페이지와 레이아웃 상태를 들고 있고, 명령 결과로 돌아온 이동(`Redirect`)은
//! 지정된 지연 후 다음 페이지 진입으로 처리한다.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use serde_json::Value;
use tracing::debug;

use crate::application::usecases::auth::current_token;
use crate::application::usecases::catalog::{SearchOutcome, TrendingOutcome};
use crate::application::usecases::detail::{DetailOutcome, ToggleOutcome};
use crate::application::usecases::favorites::FavoritesOutcome;
use crate::application::usecases::profile::{FormOutcome, ProfileOutcome};
use crate::domain::anime::Profile;
use crate::domain::policy;
use crate::domain::search::SearchQuery;
use crate::domain::session::{Credentials, PasswordChange, ProfileUpdate, Registration};
use crate::domain::view::{
    AuthChrome, Carousel, FavoriteButton, FavoriteControl, Flash, Layout, Page, Redirect, ViewId,
    update_auth_buttons,
};
use crate::infrastructure::render::render_favorite_button;
use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::repl_input::{LiveSuggest, PanelStatus, read_repl_input};

const MAIN_PAGE_ONLY: &str = "Available on the main page. Use /home first.";
const OPEN_DETAIL_FIRST: &str = "Open an anime first: /show <mal_id>";
const PROFILE_UNAVAILABLE: &str = "Could not load profile.";

/// 대화형 입력으로 `/command`를 처리한다.
pub async fn run_repl(composition: &AppComposition) -> Result<()> {
    print_welcome(composition);
    io::stdout().flush()?;

    let mut shell = Shell::new(composition);
    let mut live = LiveSuggest::new(composition.autocomplete());
    let mut pending = Some(Redirect::now(Page::home()));

    loop {
        // 예약된 이동은 입력을 받기 전에 모두 처리한다.
        while let Some(redirect) = pending.take() {
            if !redirect.after.is_zero() {
                tokio::time::sleep(redirect.after).await;
            }
            pending = report_err(shell.enter(redirect.to).await);
        }

        let prefill = shell.prefill.take();
        let status = shell.panel_status();
        let Some(raw_input) = read_repl_input(prefill.as_deref(), &status, &mut live)? else {
            println!();
            break;
        };
        let input = raw_input.trim();
        if input.is_empty() {
            continue;
        }

        match parse_repl_command(input) {
            Ok(ReplCommand::Exit) => break,
            Ok(cmd) => pending = report_err(shell.execute(cmd).await),
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("hint: start typing / for command suggestions");
            }
        }
    }

    Ok(())
}

fn report_err(result: Result<Option<Redirect>>) -> Option<Redirect> {
    match result {
        Ok(redirect) => redirect,
        Err(err) => {
            eprintln!("error: {err:#}");
            None
        }
    }
}

#[derive(Debug)]
enum TrendingMove {
    Reload,
    Next,
    Prev,
}

#[derive(Debug)]
enum ReplCommand {
    Exit,
    Home,
    InspectConfig,
    /// 인자 없는 `/login`, `/register`: 해당 폼 페이지로 이동한다.
    GoTo(Page),
    Login(Credentials),
    Register(Registration),
    Logout,
    Search(SearchQuery),
    Show(u64),
    Favorite,
    Favorites,
    Trending(TrendingMove),
    View(ViewId),
    Menu,
    Profile,
    ProfileEdit(ProfileUpdate),
    Password(PasswordChange),
}

/// 셸 화면 상태.
struct Shell<'a> {
    app: &'a AppComposition,
    page: Page,
    layout: Layout,
    carousel: Option<Carousel>,
    /// 상세 페이지에서 로그인 상태일 때만 채워진다.
    favorite: Option<FavoriteButton>,
    profile: Option<Profile>,
    prefill: Option<String>,
}

impl<'a> Shell<'a> {
    fn new(app: &'a AppComposition) -> Self {
        Self {
            app,
            page: Page::home(),
            layout: Layout::main(),
            carousel: None,
            favorite: None,
            profile: None,
            prefill: None,
        }
    }

    fn signed_in(&self) -> bool {
        current_token(self.app.token_store()).is_some()
    }

    fn flash(&mut self, flash: Flash) {
        self.app.reporter().flash(&flash);
        self.layout.set_message(flash);
    }

    fn notice(&self, message: &str) {
        self.app.reporter().status("shell", message);
    }

    fn panel_status(&self) -> PanelStatus {
        let ttl = self.app.config().message_ttl();
        PanelStatus {
            context: self.context_label(),
            flash: self.layout.message_at(Instant::now(), ttl).cloned(),
            ttl,
        }
    }

    fn context_label(&self) -> String {
        let page = match self.page {
            Page::Home { .. } => self.layout.active().label().to_string(),
            Page::Login => "Sign in".to_string(),
            Page::Register => "Register".to_string(),
            Page::Detail { mal_id } => format!("Anime #{mal_id}"),
        };
        let session = if self.signed_in() { "signed in" } else { "guest" };
        format!("{page} · {session}")
    }

    fn render_chrome(&self) -> AuthChrome {
        let chrome = update_auth_buttons(&self.layout, self.signed_in());
        self.app
            .reporter()
            .raw(&self.app.renderer().render_chrome(&chrome));
        chrome
    }

    /// 페이지에 진입하며 초기 로딩을 수행한다.
    async fn enter(&mut self, page: Page) -> Result<Option<Redirect>> {
        debug!(?page, "enter page");
        self.page = page;
        self.layout = Layout::for_page(page);
        self.carousel = None;
        self.favorite = None;

        match page {
            Page::Home { logged_out } => {
                self.app.reporter().section(page_title(&self.layout));
                if logged_out {
                    self.flash(Flash::success(policy::SIGNED_OUT));
                }

                let chrome = self.render_chrome();
                if let AuthChrome::Main {
                    load_profile: true,
                    ..
                } = chrome
                    && let Some(redirect) = self.load_profile(false).await?
                {
                    return Ok(Some(redirect));
                }

                self.load_trending().await;
            }
            Page::Login => {
                self.app.reporter().section("Sign in");
                self.app.reporter().kv("usage", "/login <email> <password>");
                self.prefill = Some("/login ".to_string());
            }
            Page::Register => {
                self.app.reporter().section("Register");
                self.app
                    .reporter()
                    .kv("usage", "/register <email> <username> <password>");
                self.prefill = Some("/register ".to_string());
            }
            Page::Detail { mal_id } => {
                self.app.reporter().section(&format!("Anime #{mal_id}"));
                self.render_chrome();
                let usecase = self.app.detail_usecase();
                match usecase.execute(mal_id).await {
                    DetailOutcome::Loaded(view) => {
                        if let FavoriteControl::Button(button) = &view.favorite {
                            self.favorite = Some(*button);
                        }
                        let renderer = self.app.renderer();
                        self.app.reporter().raw(&renderer.render_detail(&view));
                        io::stdout().flush()?;

                        // 캐릭터 응답이 늦어도 본문은 이미 보이도록 나중에 덧붙인다.
                        let characters = usecase.load_characters(mal_id).await;
                        self.app
                            .reporter()
                            .raw(&format!("\n{}", renderer.render_characters(&characters)));
                    }
                    DetailOutcome::Failed(message) => self.flash(Flash::error(message)),
                }
            }
        }

        Ok(None)
    }

    async fn execute(&mut self, command: ReplCommand) -> Result<Option<Redirect>> {
        match command {
            ReplCommand::Exit => {}
            ReplCommand::Home => return Ok(Some(Redirect::now(Page::home()))),
            ReplCommand::GoTo(page) => return Ok(Some(Redirect::now(page))),
            ReplCommand::InspectConfig => {
                let json = self.app.inspect_config_usecase().execute()?;
                self.app.reporter().raw(&json);
            }
            ReplCommand::Login(credentials) => {
                let outcome = self.app.login_usecase().execute(&credentials).await?;
                self.flash(outcome.flash);
                return Ok(outcome.redirect);
            }
            ReplCommand::Register(form) => {
                let outcome = self.app.register_usecase().execute(&form).await?;
                self.flash(outcome.flash);
                return Ok(outcome.redirect);
            }
            ReplCommand::Logout => {
                self.profile = None;
                return self.app.logout_usecase().execute().map(Some);
            }
            ReplCommand::Search(query) => {
                if !self.on_main_page() {
                    return Ok(None);
                }
                self.layout.show_view(ViewId::Search);
                match self.app.search_usecase().execute(&query).await {
                    SearchOutcome::Rejected(flash) => self.flash(flash),
                    SearchOutcome::Results(results) => self
                        .app
                        .reporter()
                        .raw(&self.app.renderer().render_results(&results)),
                    SearchOutcome::Failed(message) => self.flash(Flash::error(message)),
                }
            }
            ReplCommand::Show(mal_id) => {
                return Ok(Some(Redirect::now(Page::Detail { mal_id })));
            }
            ReplCommand::Favorite => self.toggle_favorite().await,
            ReplCommand::Favorites => {
                if self.on_main_page() {
                    self.layout.show_view(ViewId::Favorites);
                    self.load_favorites().await;
                }
            }
            ReplCommand::Trending(movement) => {
                if !self.on_main_page() {
                    return Ok(None);
                }
                self.layout.show_view(ViewId::Search);
                let moved = match (movement, self.carousel.as_mut()) {
                    (TrendingMove::Next, Some(carousel)) => {
                        carousel.next();
                        true
                    }
                    (TrendingMove::Prev, Some(carousel)) => {
                        carousel.prev();
                        true
                    }
                    _ => false,
                };
                if !moved {
                    self.load_trending().await;
                } else if let Some(carousel) = &self.carousel {
                    self.app
                        .reporter()
                        .raw(&self.app.renderer().render_carousel(carousel));
                }
            }
            ReplCommand::View(id) => {
                if !self.layout.show_view(id) {
                    self.notice(MAIN_PAGE_ONLY);
                    return Ok(None);
                }
                self.app.reporter().section(id.label());
                match id {
                    ViewId::Search => self.load_trending().await,
                    ViewId::Favorites => self.load_favorites().await,
                    ViewId::EditProfile => self.app.reporter().kv(
                        "usage",
                        "/profile-edit [--username <name>] [--avatar <path>]",
                    ),
                    ViewId::ChangePassword => self
                        .app
                        .reporter()
                        .kv("usage", "/password <current> <new> <confirm>"),
                }
            }
            ReplCommand::Menu => {
                if !self.on_main_page() {
                    return Ok(None);
                }
                if !self.signed_in() {
                    self.flash(Flash::error(policy::SIGN_IN_REQUIRED));
                    return Ok(None);
                }
                if self.layout.toggle_menu() {
                    self.app.reporter().section("Menu");
                    if let Some(profile) = &self.profile {
                        self.app
                            .reporter()
                            .raw(&self.app.renderer().render_profile(profile));
                    }
                    self.app
                        .reporter()
                        .raw("/view profile-edit · /view password · /view favorites · /logout");
                } else {
                    self.notice("menu closed");
                }
            }
            ReplCommand::Profile => return self.load_profile(true).await,
            ReplCommand::ProfileEdit(update) => {
                if self.on_main_page() {
                    self.layout.show_view(ViewId::EditProfile);
                    let outcome = self.app.update_profile_usecase().execute(&update).await;
                    return self.finish_form(outcome).await;
                }
            }
            ReplCommand::Password(form) => {
                if self.on_main_page() {
                    self.layout.show_view(ViewId::ChangePassword);
                    let outcome = self.app.change_password_usecase().execute(&form).await;
                    return self.finish_form(outcome).await;
                }
            }
        }

        Ok(None)
    }

    fn on_main_page(&self) -> bool {
        if self.layout.is_detail_page() || !matches!(self.page, Page::Home { .. }) {
            self.notice(MAIN_PAGE_ONLY);
            return false;
        }
        true
    }

    async fn load_trending(&mut self) {
        match self.app.trending_usecase().execute().await {
            TrendingOutcome::Loaded(carousel) => {
                self.app
                    .reporter()
                    .raw(&self.app.renderer().render_carousel(&carousel));
                self.carousel = Some(carousel);
            }
            TrendingOutcome::Empty(message) | TrendingOutcome::Failed(message) => {
                self.carousel = None;
                self.app.reporter().raw(&message);
            }
        }
    }

    async fn load_favorites(&mut self) {
        match self.app.favorites_usecase().execute().await {
            FavoritesOutcome::SignInRequired => self.flash(Flash::error(policy::SIGN_IN_REQUIRED)),
            FavoritesOutcome::Empty(message) => self.app.reporter().raw(&message),
            FavoritesOutcome::Loaded(list) => self
                .app
                .reporter()
                .raw(&self.app.renderer().render_favorites(&list)),
            FavoritesOutcome::Failed(message) => self.flash(Flash::error(message)),
        }
    }

    /// 프로필을 불러온다. 세션이 만료되면 로그아웃 이동을 돌려준다.
    async fn load_profile(&mut self, verbose: bool) -> Result<Option<Redirect>> {
        match self.app.load_profile_usecase().execute().await? {
            ProfileOutcome::Anonymous => {
                self.profile = None;
                if verbose {
                    self.flash(Flash::error(policy::SIGN_IN_REQUIRED));
                }
            }
            ProfileOutcome::Loaded(profile) => {
                if verbose {
                    self.app
                        .reporter()
                        .raw(&self.app.renderer().render_profile(&profile));
                } else {
                    self.app
                        .reporter()
                        .kv("Signed in", &profile.username);
                }
                self.profile = Some(profile);
            }
            ProfileOutcome::SignedOut(redirect) => {
                self.profile = None;
                return Ok(Some(redirect));
            }
            ProfileOutcome::Unavailable => {
                if verbose {
                    self.flash(Flash::error(PROFILE_UNAVAILABLE));
                }
            }
        }
        Ok(None)
    }

    async fn toggle_favorite(&mut self) {
        let Page::Detail { mal_id } = self.page else {
            self.notice(OPEN_DETAIL_FIRST);
            return;
        };
        let Some(button) = self.favorite else {
            self.flash(Flash::error(policy::SIGN_IN_FOR_FAVORITES));
            return;
        };

        match self
            .app
            .toggle_favorite_usecase()
            .execute(mal_id, button)
            .await
        {
            ToggleOutcome::Toggled(button) => {
                self.app.reporter().raw(&render_favorite_button(&button));
                self.favorite = Some(button);
            }
            ToggleOutcome::SignInRequired => {
                self.flash(Flash::error(policy::SIGN_IN_FOR_FAVORITES))
            }
            ToggleOutcome::Failed(message) => self.flash(Flash::error(message)),
        }
    }

    /// 폼 결과를 표시하고, 성공이면 잠시 후 검색 화면으로 복귀한다.
    async fn finish_form(&mut self, outcome: FormOutcome) -> Result<Option<Redirect>> {
        let return_after = outcome.return_after;
        self.flash(outcome.flash);
        let Some(after) = return_after else {
            return Ok(None);
        };

        if let Some(redirect) = self.load_profile(false).await? {
            return Ok(Some(redirect));
        }
        tokio::time::sleep(after).await;
        self.layout.reset_to_search();
        self.app.reporter().section(page_title(&self.layout));
        Ok(None)
    }
}

fn page_title(layout: &Layout) -> &'static str {
    layout.title().unwrap_or(layout.active().label())
}

fn parse_repl_command(input: &str) -> Result<ReplCommand, String> {
    if !input.starts_with('/') {
        return Err("slash command only. example: /search naruto".to_string());
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return Err("empty command".to_string());
    }
    let args = &parts[1..];

    match parts[0] {
        "/exit" | "/quit" => Ok(ReplCommand::Exit),
        "/home" => Ok(ReplCommand::Home),
        "/config" => Ok(ReplCommand::InspectConfig),
        "/logout" => Ok(ReplCommand::Logout),
        "/favorite" => Ok(ReplCommand::Favorite),
        "/favorites" => Ok(ReplCommand::Favorites),
        "/menu" => Ok(ReplCommand::Menu),
        "/profile" => Ok(ReplCommand::Profile),
        "/search" => parse_search(args).map(ReplCommand::Search),
        "/show" => match args {
            [id] => id
                .parse::<u64>()
                .map(ReplCommand::Show)
                .map_err(|_| format!("invalid mal_id: {id}")),
            _ => Err("usage: /show <mal_id>".to_string()),
        },
        "/trending" => match args {
            [] => Ok(ReplCommand::Trending(TrendingMove::Reload)),
            ["next"] => Ok(ReplCommand::Trending(TrendingMove::Next)),
            ["prev"] => Ok(ReplCommand::Trending(TrendingMove::Prev)),
            _ => Err("usage: /trending [next|prev]".to_string()),
        },
        "/view" => match args {
            [name] => ViewId::parse(name)
                .map(ReplCommand::View)
                .ok_or_else(|| format!("unknown view: {name}")),
            _ => Err("usage: /view <search|profile-edit|password|favorites>".to_string()),
        },
        "/login" => match args {
            [] => Ok(ReplCommand::GoTo(Page::Login)),
            [email, password] => Ok(ReplCommand::Login(Credentials {
                email: (*email).to_string(),
                password: (*password).to_string(),
            })),
            _ => Err("usage: /login <email> <password>".to_string()),
        },
        "/register" => match args {
            [] => Ok(ReplCommand::GoTo(Page::Register)),
            [email, username, password] => Ok(ReplCommand::Register(Registration {
                email: (*email).to_string(),
                username: (*username).to_string(),
                password: (*password).to_string(),
            })),
            _ => Err("usage: /register <email> <username> <password>".to_string()),
        },
        "/profile-edit" => parse_profile_edit(args).map(ReplCommand::ProfileEdit),
        "/password" => match args {
            [current, new, confirm] => Ok(ReplCommand::Password(PasswordChange {
                current: (*current).to_string(),
                new: (*new).to_string(),
                confirm: (*confirm).to_string(),
            })),
            _ => Err("usage: /password <current> <new> <confirm>".to_string()),
        },
        other => Err(format!("unknown command: {other}")),
    }
}

fn parse_search(args: &[&str]) -> Result<SearchQuery, String> {
    let mut words: Vec<&str> = Vec::new();
    let mut genre: Option<u32> = None;
    let mut year: Option<u32> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match *arg {
            "--genre" => genre = Some(parse_number(iter.next(), "--genre")?),
            "--year" => year = Some(parse_number(iter.next(), "--year")?),
            _ if arg.starts_with("--") => return Err(format!("unknown option: {arg}")),
            _ => words.push(arg),
        }
    }

    Ok(SearchQuery::new(&words.join(" "), genre, year))
}

fn parse_number(value: Option<&&str>, flag: &str) -> Result<u32, String> {
    let Some(raw) = value else {
        return Err(format!("{flag} needs a number"));
    };
    raw.parse::<u32>()
        .map_err(|_| format!("{flag} needs a number, got {raw}"))
}

fn parse_profile_edit(args: &[&str]) -> Result<ProfileUpdate, String> {
    const USAGE: &str = "usage: /profile-edit [--username <name>] [--avatar <path>]";
    let mut update = ProfileUpdate::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match *arg {
            "--username" => {
                let name = iter.next().ok_or(USAGE)?;
                update.username = Some((*name).to_string());
            }
            "--avatar" => {
                let path = iter.next().ok_or(USAGE)?;
                update.avatar = Some(PathBuf::from(path));
            }
            _ => return Err(format!("unknown option: {arg}")),
        }
    }

    if update.username.is_none() && update.avatar.is_none() {
        return Err(USAGE.to_string());
    }
    Ok(update)
}

fn print_welcome(composition: &AppComposition) {
    let interactive = io::stdout().is_terminal();
    if interactive {
        // 대화형 터미널에서는 시작 화면을 지우고 배너를 출력한다.
        print!("\x1b[2J\x1b[H");
    }

    let title = paint("anishelf interactive shell", "1;36", interactive);
    let subtitle = paint("anime catalog and favorites", "2;37", interactive);
    let cmd_palette = paint("/", "1;33", interactive);
    let cmd_search = paint("/search <title> [--genre <id>] [--year <yyyy>]", "1;32", interactive);
    let cmd_login = paint("/login <email> <password>", "1;35", interactive);
    let cmd_exit = paint("/exit", "1;31", interactive);

    println!("+------------------------------------------------------------+");
    println!("| {:<58} |", title);
    println!("| {:<58} |", subtitle);
    println!("+------------------------------------------------------------+");
    println!("| Status Dashboard                                            |");
    for line in build_startup_dashboard_lines(composition) {
        println!("| {:<58} |", fit_box_line(&line, 58));
    }
    println!("+------------------------------------------------------------+");
    println!("| Quick start                                                 |");
    println!("|  0) {:<54} |", cmd_palette);
    println!("|  1) {:<54} |", cmd_search);
    println!("|  2) {:<54} |", cmd_login);
    println!("|  3) {:<54} |", cmd_exit);
    println!("+------------------------------------------------------------+");
    println!();
}

fn paint(text: &str, ansi: &str, interactive: bool) -> String {
    if interactive {
        format!("\x1b[{ansi}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn build_startup_dashboard_lines(composition: &AppComposition) -> Vec<String> {
    let mut lines = vec![format!("Server: {}", composition.base_url())];

    let session = if current_token(composition.token_store()).is_some() {
        "signed in"
    } else {
        "guest"
    };
    lines.push(format!("Session: {session}"));

    let inspection_json = match composition.inspect_config_usecase().execute() {
        Ok(raw) => raw,
        Err(err) => {
            lines.push("Config: error".to_string());
            lines.push(format!("detail: {err}"));
            lines.push("hint: run `/config` to inspect and fix".to_string());
            return lines;
        }
    };

    let value: Value = match serde_json::from_str(&inspection_json) {
        Ok(v) => v,
        Err(_) => {
            lines.push("Config: loaded (dashboard parse fallback)".to_string());
            return lines;
        }
    };

    let loaded_count = value
        .get("loaded_paths")
        .and_then(|v| v.as_array())
        .map(|arr| arr.len())
        .unwrap_or(0);
    if loaded_count == 0 {
        lines.push("Config: defaults (no config file loaded)".to_string());
    } else {
        lines.push(format!("Config: ok (loaded files: {loaded_count})"));
    }

    if let Some(path) = value
        .pointer("/effective/token_path")
        .and_then(|v| v.as_str())
    {
        lines.push(format!("Token file: {path}"));
    }

    lines
}

fn fit_box_line(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return text.to_string();
    }

    if width <= 3 {
        return ".".repeat(width);
    }

    let keep = width - 3;
    let head: String = chars.into_iter().take(keep).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_collects_words_and_filters() {
        let Ok(ReplCommand::Search(query)) =
            parse_repl_command("/search one piece --genre 1 --year 1999")
        else {
            panic!("search command expected");
        };
        assert_eq!(query.text.as_deref(), Some("one piece"));
        assert_eq!(query.genre, Some(1));
        assert_eq!(query.year, Some(1999));
    }

    #[test]
    fn bare_search_is_an_empty_query() {
        let Ok(ReplCommand::Search(query)) = parse_repl_command("/search") else {
            panic!("search command expected");
        };
        assert!(query.is_empty());
    }

    #[test]
    fn search_rejects_bad_filters() {
        assert!(parse_repl_command("/search --year soon").is_err());
        assert!(parse_repl_command("/search --genre").is_err());
        assert!(parse_repl_command("/search x --sort asc").is_err());
    }

    #[test]
    fn show_requires_numeric_id() {
        assert!(matches!(
            parse_repl_command("/show 5114"),
            Ok(ReplCommand::Show(5114))
        ));
        assert!(parse_repl_command("/show abc").is_err());
        assert!(parse_repl_command("/show").is_err());
    }

    #[test]
    fn bare_login_and_register_open_their_pages() {
        assert!(matches!(
            parse_repl_command("/login"),
            Ok(ReplCommand::GoTo(Page::Login))
        ));
        assert!(matches!(
            parse_repl_command("/register"),
            Ok(ReplCommand::GoTo(Page::Register))
        ));
        assert!(matches!(
            parse_repl_command("/login a@b.c secret"),
            Ok(ReplCommand::Login(_))
        ));
        assert!(parse_repl_command("/login a@b.c").is_err());
    }

    #[test]
    fn view_names_map_to_views() {
        assert!(matches!(
            parse_repl_command("/view password"),
            Ok(ReplCommand::View(ViewId::ChangePassword))
        ));
        assert!(parse_repl_command("/view settings").is_err());
    }

    #[test]
    fn profile_edit_needs_at_least_one_field() {
        assert!(parse_repl_command("/profile-edit").is_err());
        assert!(parse_repl_command("/profile-edit --username").is_err());
        let Ok(ReplCommand::ProfileEdit(update)) =
            parse_repl_command("/profile-edit --avatar ./me.png")
        else {
            panic!("profile edit expected");
        };
        assert_eq!(update.avatar, Some(PathBuf::from("./me.png")));
        assert!(update.username.is_none());
    }

    #[test]
    fn trending_moves() {
        assert!(matches!(
            parse_repl_command("/trending next"),
            Ok(ReplCommand::Trending(TrendingMove::Next))
        ));
        assert!(parse_repl_command("/trending sideways").is_err());
    }

    #[test]
    fn plain_text_is_rejected() {
        assert!(parse_repl_command("naruto").is_err());
        assert!(parse_repl_command("/dance").is_err());
    }

    #[test]
    fn fit_box_line_truncates() {
        assert_eq!(fit_box_line("abcdef", 5), "ab...");
        assert_eq!(fit_box_line("abc", 5), "abc");
    }
}

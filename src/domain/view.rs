//! 단일 페이지 레이아웃 상태 머신.
//!
//! 상호 배타적인 뷰는 하나의 enum 값으로만 보관하므로 항상 정확히 하나만 보인다.
//! 상세 페이지는 스위처에 속하지 않으며, 그 위에서의 전환 요청은 무시된다.

use std::time::{Duration, Instant};

use crate::domain::anime::{AnimeDetail, AnimeSummary, Character, FavoriteStatus};

pub const SEARCH_TITLE: &str = "Search Anime";

/// 셸이 현재 머무는 페이지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home { logged_out: bool },
    Login,
    Register,
    Detail { mal_id: u64 },
}

impl Page {
    pub fn home() -> Self {
        Self::Home { logged_out: false }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Self::Detail { .. })
    }
}

/// 지연 후 실행할 페이지 이동.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: Page,
    pub after: Duration,
}

impl Redirect {
    pub fn now(to: Page) -> Self {
        Self {
            to,
            after: Duration::ZERO,
        }
    }

    pub fn after_ms(to: Page, ms: u64) -> Self {
        Self {
            to,
            after: Duration::from_millis(ms),
        }
    }
}

/// 상호 배타적인 뷰 컨테이너 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Search,
    EditProfile,
    ChangePassword,
    Favorites,
}

impl ViewId {
    pub const ALL: [ViewId; 4] = [
        ViewId::Search,
        ViewId::EditProfile,
        ViewId::ChangePassword,
        ViewId::Favorites,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::EditProfile => "Edit Profile",
            Self::ChangePassword => "Change Password",
            Self::Favorites => "My Favorites",
        }
    }

    /// 셸 명령 인자(`/view <name>`)를 해석한다.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "search" => Some(Self::Search),
            "profile" | "edit-profile" | "profile-edit" => Some(Self::EditProfile),
            "password" | "change-password" => Some(Self::ChangePassword),
            "favorites" | "favs" => Some(Self::Favorites),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Error,
    Success,
}

/// 일정 시간 후 사라지는 상태 메시지.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub text: String,
    pub kind: FlashKind,
    pub created_at: Instant,
}

impl Flash {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FlashKind::Error,
            created_at: Instant::now(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FlashKind::Success,
            created_at: Instant::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == FlashKind::Error
    }

    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }

    pub fn style(&self) -> &'static str {
        match self.kind {
            FlashKind::Error => "error-message",
            FlashKind::Success => "success-message",
        }
    }
}

/// 메인 페이지 레이아웃. 상세 페이지용 인스턴스는 모든 전환을 무시한다.
#[derive(Debug, Clone)]
pub struct Layout {
    detail_page: bool,
    active: ViewId,
    sidebar_open: bool,
    message: Option<Flash>,
}

impl Layout {
    pub fn main() -> Self {
        Self {
            detail_page: false,
            active: ViewId::Search,
            sidebar_open: false,
            message: None,
        }
    }

    pub fn detail() -> Self {
        Self {
            detail_page: true,
            ..Self::main()
        }
    }

    pub fn for_page(page: Page) -> Self {
        if page.is_detail() {
            Self::detail()
        } else {
            Self::main()
        }
    }

    pub fn is_detail_page(&self) -> bool {
        self.detail_page
    }

    /// 검색 UI와 다른 패널을 모두 숨기고 지정한 패널만 노출한다. 사이드바는 닫는다.
    /// 상세 페이지에서는 아무것도 하지 않고 `false`를 돌려준다.
    pub fn show_view(&mut self, id: ViewId) -> bool {
        if self.detail_page {
            return false;
        }
        if id == ViewId::Search {
            self.reset_to_search();
            return true;
        }

        self.active = id;
        self.sidebar_open = false;
        true
    }

    /// 검색 레이아웃을 복원하고 일시 메시지를 지운다.
    pub fn reset_to_search(&mut self) {
        if self.detail_page {
            return;
        }
        self.active = ViewId::Search;
        self.message = None;
    }

    pub fn active(&self) -> ViewId {
        self.active
    }

    pub fn is_visible(&self, id: ViewId) -> bool {
        !self.detail_page && self.active == id
    }

    pub fn visible_views(&self) -> Vec<ViewId> {
        ViewId::ALL
            .into_iter()
            .filter(|id| self.is_visible(*id))
            .collect()
    }

    /// 검색 폼/결과/트렌드/제목 묶음의 노출 여부.
    pub fn search_ui_visible(&self) -> bool {
        self.is_visible(ViewId::Search)
    }

    pub fn title(&self) -> Option<&'static str> {
        self.search_ui_visible().then_some(SEARCH_TITLE)
    }

    /// 햄버거 메뉴 토글. 열린 상태를 돌려준다.
    pub fn toggle_menu(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn set_message(&mut self, flash: Flash) {
        self.message = Some(flash);
    }

    /// 만료되지 않은 메시지만 돌려준다.
    pub fn message_at(&self, now: Instant, ttl: Duration) -> Option<&Flash> {
        self.message
            .as_ref()
            .filter(|flash| !flash.is_expired_at(now, ttl))
    }
}

/// 상세 페이지 내비게이션 영역의 인증 어포던스.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAffordance {
    LogoutButton,
    LoginLink,
}

/// 토큰 유무에 따른 인증 관련 UI 노출 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChrome {
    Main {
        login_link: bool,
        sidebar: bool,
        menu_toggle: bool,
        load_profile: bool,
    },
    Detail {
        nav: NavAffordance,
    },
}

/// 로그인 링크/사이드바/메뉴 버튼 노출 여부를 결정한다.
pub fn update_auth_buttons(layout: &Layout, signed_in: bool) -> AuthChrome {
    if layout.is_detail_page() {
        let nav = if signed_in {
            NavAffordance::LogoutButton
        } else {
            NavAffordance::LoginLink
        };
        return AuthChrome::Detail { nav };
    }

    AuthChrome::Main {
        login_link: !signed_in,
        sidebar: signed_in,
        menu_toggle: signed_in,
        load_profile: signed_in,
    }
}

pub const ADD_FAVORITE_LABEL: &str = "Add to favorites";
pub const REMOVE_FAVORITE_LABEL: &str = "Remove from favorites";
pub const FAVORITE_STYLE: &str = "is-favorite";

/// 상세 페이지의 즐겨찾기 토글 버튼. 라벨과 스타일은 같은 플래그에서 파생된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FavoriteButton {
    is_favorite: bool,
}

impl FavoriteButton {
    pub fn new(is_favorite: bool) -> Self {
        Self { is_favorite }
    }

    /// 서버가 돌려준 상태로 버튼을 갱신한다.
    pub fn apply(&mut self, status: FavoriteStatus) {
        self.is_favorite = status.is_favorite;
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn label(&self) -> &'static str {
        if self.is_favorite {
            REMOVE_FAVORITE_LABEL
        } else {
            ADD_FAVORITE_LABEL
        }
    }

    pub fn style(&self) -> Option<&'static str> {
        self.is_favorite.then_some(FAVORITE_STYLE)
    }
}

/// 상세 페이지의 즐겨찾기 영역. 비로그인 사용자는 로그인 안내를 본다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteControl {
    Button(FavoriteButton),
    SignInPrompt,
}

/// 캐릭터 섹션. 상세 본문을 먼저 보여준 뒤 채우며, 조회 실패 시 빈 섹션으로 남긴다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterSection {
    Pending,
    Loaded(Vec<Character>),
    Unavailable,
}

/// 상세 페이지 뷰 모델.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub anime: AnimeDetail,
    pub favorite: FavoriteControl,
    pub characters: CharacterSection,
}

pub const DEFAULT_CAROUSEL_WINDOW: usize = 5;

/// 트렌드 캐러셀. 이전/다음 버튼은 창 크기만큼 이동하고 양 끝에서 멈춘다.
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    items: Vec<AnimeSummary>,
    offset: usize,
    window: usize,
}

impl Carousel {
    pub fn new(items: Vec<AnimeSummary>, window: usize) -> Self {
        Self {
            items,
            offset: 0,
            window: window.max(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn visible(&self) -> &[AnimeSummary] {
        let end = (self.offset + self.window).min(self.items.len());
        &self.items[self.offset.min(end)..end]
    }

    pub fn next(&mut self) {
        let max_offset = self.items.len().saturating_sub(self.window);
        self.offset = (self.offset + self.window).min(max_offset);
    }

    pub fn prev(&mut self) {
        self.offset = self.offset.saturating_sub(self.window);
    }
}

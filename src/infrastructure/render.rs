//! 뷰 모델을 터미널 텍스트로 바꾸는 렌더링 모듈.

use crate::domain::anime::{AnimeDetail, AnimeSummary, Profile};
use crate::domain::policy::{self, PLACEHOLDER_IMAGE};
use crate::domain::view::{
    AuthChrome, Carousel, CharacterSection, DetailView, FavoriteButton, FavoriteControl,
    NavAffordance,
};

/// 검색 결과 카드 하나를 만든다.
pub fn render_card(anime: &AnimeSummary, synopsis_chars: usize) -> String {
    let image = anime.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE);
    format!(
        "#{} {}\n  image: {}\n  {}\n  link: {}",
        anime.mal_id,
        anime.title,
        image,
        policy::synopsis_preview(anime.synopsis.as_deref(), synopsis_chars),
        policy::detail_link(anime.mal_id)
    )
}

/// 검색 결과 목록. 비어 있으면 안내 문구만 남긴다.
pub fn render_results(results: &[AnimeSummary], synopsis_chars: usize) -> String {
    if results.is_empty() {
        return policy::NO_RESULTS.to_string();
    }
    results
        .iter()
        .map(|anime| render_card(anime, synopsis_chars))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// 트렌드 캐러셀의 현재 창.
pub fn render_carousel(carousel: &Carousel) -> String {
    let visible = carousel.visible();
    let mut out = String::new();
    if visible.is_empty() {
        out.push_str(policy::TRENDING_EMPTY);
        return out;
    }

    let first = carousel.offset() + 1;
    let last = carousel.offset() + visible.len();
    out.push_str(&format!(
        "Trending {first}-{last} of {}\n",
        carousel.len()
    ));
    for anime in visible {
        let image = anime.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE);
        out.push_str(&format!("  #{:<6} {}  ({})\n", anime.mal_id, anime.title, image));
    }
    out.push_str("  < prev | next >");
    out
}

/// 즐겨찾기 버튼 표기. 스타일 클래스가 있으면 함께 보여준다.
pub fn render_favorite_button(button: &FavoriteButton) -> String {
    match button.style() {
        Some(style) => format!("[{}] ({style})", button.label()),
        None => format!("[{}]", button.label()),
    }
}

/// 상세 페이지 본문.
pub fn render_detail(view: &DetailView) -> String {
    let anime = &view.anime;
    let mut out = String::new();

    out.push_str(&format!("{}\n", anime.title));
    out.push_str(&format!("{:<12}: {}\n", "Type", anime.kind.as_deref().unwrap_or("?")));
    out.push_str(&format!(
        "{:<12}: {}\n",
        "Year",
        anime.year.map(|y| y.to_string()).unwrap_or_else(|| "?".into())
    ));
    out.push_str(&format!("{:<12}: {}\n", "Genres", genres_line(anime)));
    out.push_str(&format!(
        "{:<12}: {}\n",
        "Status",
        anime.status.as_deref().unwrap_or("?")
    ));
    out.push_str(&format!(
        "{:<12}: {}\n",
        "Image",
        anime.image_url().unwrap_or(PLACEHOLDER_IMAGE)
    ));

    let favorite = match &view.favorite {
        FavoriteControl::Button(button) => render_favorite_button(button),
        FavoriteControl::SignInPrompt => policy::SIGN_IN_FOR_FAVORITES.to_string(),
    };
    out.push_str(&format!("{:<12}: {}\n\n", "Favorite", favorite));

    let synopsis = anime
        .synopsis
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(policy::NO_SYNOPSIS);
    out.push_str(&format!("Synopsis\n  {synopsis}\n"));

    if let Some(trailer) = anime.trailer_url() {
        out.push_str(&format!("\nTrailer\n  {trailer}\n"));
    }

    let characters = render_characters(&view.characters);
    if !characters.is_empty() {
        out.push('\n');
        out.push_str(&characters);
    }

    out.trim_end().to_string()
}

/// 캐릭터 섹션. 아직 조회 전이면 빈 문자열.
pub fn render_characters(section: &CharacterSection) -> String {
    let list = match section {
        CharacterSection::Pending => return String::new(),
        CharacterSection::Unavailable => return "Characters".to_string(),
        CharacterSection::Loaded(list) => list,
    };

    let mut out = String::from("Characters\n");
    if list.is_empty() {
        out.push_str(&format!("  {}\n", policy::NO_CHARACTERS));
    }
    for character in list {
        let image = character.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE);
        out.push_str(&format!(
            "  - {} ({}) {}\n",
            character.name, character.role, image
        ));
    }
    out.trim_end().to_string()
}

/// 즐겨찾기 목록.
pub fn render_favorites(favorites: &[AnimeDetail]) -> String {
    if favorites.is_empty() {
        return policy::FAVORITES_EMPTY.to_string();
    }
    favorites
        .iter()
        .map(|anime| {
            let year = anime.year.map(|y| format!(" ({y})")).unwrap_or_default();
            format!(
                "#{} {}{}\n  link: {}",
                anime.mal_id,
                anime.title,
                year,
                policy::detail_link(anime.mal_id)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 사이드바 프로필 요약.
pub fn render_profile(profile: &Profile) -> String {
    format!(
        "{:<12}: {}\n{:<12}: {}\n{:<12}: {}",
        "Username",
        profile.username,
        "Email",
        profile.email.as_deref().unwrap_or("-"),
        "Avatar",
        profile.avatar_url.as_deref().unwrap_or("-")
    )
}

/// 인증 상태에 따른 내비게이션 줄.
pub fn render_chrome(chrome: &AuthChrome) -> String {
    match chrome {
        AuthChrome::Main {
            login_link: true, ..
        } => "[Sign in] /login   [Register] /register".to_string(),
        AuthChrome::Main { menu_toggle, .. } => {
            let menu = if *menu_toggle { "[Menu] /menu   " } else { "" };
            format!("{menu}[Sign out] /logout")
        }
        AuthChrome::Detail {
            nav: NavAffordance::LogoutButton,
        } => "[Sign out] /logout".to_string(),
        AuthChrome::Detail {
            nav: NavAffordance::LoginLink,
        } => "[Sign in] /login".to_string(),
    }
}

fn genres_line(anime: &AnimeDetail) -> String {
    let names = anime.genre_names();
    if names.is_empty() {
        "N/A".to_string()
    } else {
        names.join(", ")
    }
}

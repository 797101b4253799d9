//! 렌더링 포트 구현 어댑터.

use crate::application::ports::ViewRenderer;
use crate::domain::anime::{AnimeDetail, AnimeSummary, Profile};
use crate::domain::view::{AuthChrome, Carousel, CharacterSection, DetailView};
use crate::infrastructure::render;

/// 터미널 텍스트 렌더러. 카드 시놉시스 길이만 설정에서 받는다.
pub struct TextRenderer {
    synopsis_chars: usize,
}

impl TextRenderer {
    pub fn new(synopsis_chars: usize) -> Self {
        Self { synopsis_chars }
    }
}

impl ViewRenderer for TextRenderer {
    fn render_results(&self, results: &[AnimeSummary]) -> String {
        render::render_results(results, self.synopsis_chars)
    }

    fn render_carousel(&self, carousel: &Carousel) -> String {
        render::render_carousel(carousel)
    }

    fn render_detail(&self, view: &DetailView) -> String {
        render::render_detail(view)
    }

    fn render_characters(&self, section: &CharacterSection) -> String {
        render::render_characters(section)
    }

    fn render_favorites(&self, favorites: &[AnimeDetail]) -> String {
        render::render_favorites(favorites)
    }

    fn render_profile(&self, profile: &Profile) -> String {
        render::render_profile(profile)
    }

    fn render_chrome(&self, chrome: &AuthChrome) -> String {
        render::render_chrome(chrome)
    }
}

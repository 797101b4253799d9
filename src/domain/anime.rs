//! 카탈로그 응답 엔티티(애니메이션/캐릭터/즐겨찾기/프로필).
//!
//! 백엔드 응답을 그대로 반영하는 일회성 값 객체이며 캐시나 정규화는 하지 않는다.

use serde::{Deserialize, Serialize};

/// 검색/트렌드 목록의 카드 단위 요약.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnimeSummary {
    pub mal_id: u64,
    pub title: String,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Genre {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ImageSet {
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Images {
    #[serde(default)]
    pub jpg: ImageSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Trailer {
    #[serde(default)]
    pub embed_url: Option<String>,
}

/// 상세 페이지용 애니메이션 정보.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnimeDetail {
    pub mal_id: u64,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub trailer: Option<Trailer>,
}

impl AnimeDetail {
    pub fn image_url(&self) -> Option<&str> {
        self.images.jpg.image_url.as_deref()
    }

    /// 임베드 URL이 있을 때만 트레일러 섹션을 노출한다.
    pub fn trailer_url(&self) -> Option<&str> {
        self.trailer
            .as_ref()
            .and_then(|t| t.embed_url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub role: String,
}

/// 즐겨찾기 상태/토글 응답. 필드가 없으면 즐겨찾기가 아닌 것으로 본다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct FavoriteStatus {
    #[serde(default)]
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

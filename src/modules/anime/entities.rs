use serde::{Deserialize, Serialize};

use super::value_objects::AnimeType;

/// Genre as listed by the catalog's taxonomy endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub mal_id: i64,
    pub name: String,
}

/// A catalog entry as consumed by the presentation layer.
///
/// All optional fields stay optional: the remote API routinely omits score,
/// popularity and imagery for little-known or unaired entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    pub mal_id: i64,
    pub title: String,
    pub anime_type: AnimeType,
    pub score: Option<f32>,
    pub scored_by: Option<i64>,
    pub rank: Option<i32>,
    pub popularity: Option<i32>,
    pub episodes: Option<i32>,
    pub status: Option<String>,
    pub rating: Option<String>,
    pub synopsis: Option<String>,
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
    pub trailer_embed_url: Option<String>,
    pub aired: Option<String>,
    pub genres: Vec<Genre>,
    pub studios: Vec<String>,
    pub producers: Vec<String>,
}

impl Anime {
    /// Minimal record, handy for tests and placeholder rows.
    pub fn new(mal_id: i64, title: impl Into<String>) -> Self {
        Self {
            mal_id,
            title: title.into(),
            anime_type: AnimeType::Unknown,
            score: None,
            scored_by: None,
            rank: None,
            popularity: None,
            episodes: None,
            status: None,
            rating: None,
            synopsis: None,
            image_url: None,
            large_image_url: None,
            trailer_embed_url: None,
            aired: None,
            genres: Vec::new(),
            studios: Vec::new(),
            producers: Vec::new(),
        }
    }

    pub fn genre_names(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(|g| g.name.as_str())
    }
}

/// A character appearance attached to an entry's detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRole {
    pub mal_id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub role: Option<String>,
    pub favorites: Option<i32>,
}

/// A community recommendation attached to an entry's detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub mal_id: i64,
    pub title: String,
    pub image_url: Option<String>,
    pub votes: Option<i32>,
}

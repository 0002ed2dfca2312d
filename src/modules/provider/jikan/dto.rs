use serde::{Deserialize, Serialize};

/// Jikan wraps every payload in `{ "data": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct JikanResponse<T> {
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanAnime {
    pub mal_id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub anime_type: Option<String>,
    pub score: Option<f32>,
    pub scored_by: Option<i64>,
    pub rank: Option<i32>,
    pub popularity: Option<i32>,
    pub episodes: Option<i32>,
    pub status: Option<String>,
    pub rating: Option<String>,
    pub synopsis: Option<String>,
    pub images: Option<JikanImages>,
    pub trailer: Option<JikanTrailer>,
    pub aired: Option<JikanAired>,
    #[serde(default)]
    pub genres: Vec<JikanNamedEntity>,
    #[serde(default)]
    pub studios: Vec<JikanNamedEntity>,
    #[serde(default)]
    pub producers: Vec<JikanNamedEntity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanImages {
    pub jpg: Option<JikanImageSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanImageSet {
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanTrailer {
    pub embed_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanAired {
    pub string: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JikanNamedEntity {
    pub mal_id: i64,
    pub name: String,
}

// /anime/{id}/characters entries

#[derive(Debug, Clone, Deserialize)]
pub struct JikanCharacterEntry {
    pub character: JikanCharacter,
    pub role: Option<String>,
    pub favorites: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanCharacter {
    pub mal_id: i64,
    pub name: String,
    pub images: Option<JikanImages>,
}

// /anime/{id}/recommendations entries

#[derive(Debug, Clone, Deserialize)]
pub struct JikanRecommendationEntry {
    pub entry: JikanRecommendedAnime,
    pub votes: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanRecommendedAnime {
    pub mal_id: i64,
    pub title: String,
    pub images: Option<JikanImages>,
}

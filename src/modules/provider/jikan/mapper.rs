use crate::modules::anime::{Anime, AnimeType, CharacterRole, Genre, RecommendationEntry};

use super::dto::{
    JikanAnime, JikanCharacterEntry, JikanImages, JikanNamedEntity, JikanRecommendationEntry,
};

/// Maps Jikan DTOs onto the crate's domain entities.
pub struct JikanMapper;

impl JikanMapper {
    pub fn to_anime(dto: JikanAnime) -> Anime {
        let (image_url, large_image_url) = Self::image_urls(dto.images.as_ref());
        Anime {
            mal_id: dto.mal_id,
            title: dto.title,
            anime_type: dto
                .anime_type
                .as_deref()
                .map(AnimeType::from)
                .unwrap_or_default(),
            score: dto.score,
            scored_by: dto.scored_by,
            rank: dto.rank,
            popularity: dto.popularity,
            episodes: dto.episodes,
            status: dto.status,
            rating: dto.rating,
            synopsis: dto.synopsis,
            image_url,
            large_image_url,
            trailer_embed_url: dto.trailer.and_then(|t| t.embed_url),
            aired: dto.aired.and_then(|a| a.string),
            genres: dto.genres.into_iter().map(Self::to_genre).collect(),
            studios: Self::names(dto.studios),
            producers: Self::names(dto.producers),
        }
    }

    pub fn to_genre(dto: JikanNamedEntity) -> Genre {
        Genre {
            mal_id: dto.mal_id,
            name: dto.name,
        }
    }

    pub fn to_character(dto: JikanCharacterEntry) -> CharacterRole {
        let (image_url, _) = Self::image_urls(dto.character.images.as_ref());
        CharacterRole {
            mal_id: dto.character.mal_id,
            name: dto.character.name,
            image_url,
            role: dto.role,
            favorites: dto.favorites,
        }
    }

    pub fn to_recommendation(dto: JikanRecommendationEntry) -> RecommendationEntry {
        let (image_url, _) = Self::image_urls(dto.entry.images.as_ref());
        RecommendationEntry {
            mal_id: dto.entry.mal_id,
            title: dto.entry.title,
            image_url,
            votes: dto.votes,
        }
    }

    fn names(entities: Vec<JikanNamedEntity>) -> Vec<String> {
        entities.into_iter().map(|e| e.name).collect()
    }

    fn image_urls(images: Option<&JikanImages>) -> (Option<String>, Option<String>) {
        match images.and_then(|i| i.jpg.as_ref()) {
            Some(set) => (set.image_url.clone(), set.large_image_url.clone()),
            None => (None, None),
        }
    }
}

pub mod entities;
pub mod value_objects;

pub use entities::{Anime, CharacterRole, Genre, RecommendationEntry};
pub use value_objects::AnimeType;

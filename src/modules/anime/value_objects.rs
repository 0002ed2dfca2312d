use serde::{Deserialize, Serialize};
use std::fmt;

/// Media kind of a catalog entry as reported by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimeType {
    TV,
    Movie,
    OVA,
    Special,
    ONA,
    Music,
    Unknown,
}

impl AnimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimeType::TV => "TV",
            AnimeType::Movie => "Movie",
            AnimeType::OVA => "OVA",
            AnimeType::Special => "Special",
            AnimeType::ONA => "ONA",
            AnimeType::Music => "Music",
            AnimeType::Unknown => "Unknown",
        }
    }
}

impl Default for AnimeType {
    fn default() -> Self {
        AnimeType::Unknown
    }
}

impl fmt::Display for AnimeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for AnimeType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "tv" => AnimeType::TV,
            "movie" => AnimeType::Movie,
            "ova" => AnimeType::OVA,
            "special" => AnimeType::Special,
            "ona" => AnimeType::ONA,
            "music" => AnimeType::Music,
            _ => AnimeType::Unknown,
        }
    }
}

impl From<String> for AnimeType {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(AnimeType::from("TV"), AnimeType::TV);
        assert_eq!(AnimeType::from("tv"), AnimeType::TV);
        assert_eq!(AnimeType::from("Movie"), AnimeType::Movie);
        assert_eq!(AnimeType::from("movie"), AnimeType::Movie);
        assert_eq!(AnimeType::from("garbage"), AnimeType::Unknown);
    }
}

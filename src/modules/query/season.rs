use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Broadcast season used by the seasonal-list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Get season from string (case insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "winter" => Some(Self::Winter),
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "fall" | "autumn" => Some(Self::Fall),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
        }
    }

    /// Get season from month (1-12)
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            12 | 1 | 2 => Some(Self::Winter),
            3 | 4 | 5 => Some(Self::Spring),
            6 | 7 | 8 => Some(Self::Summer),
            9 | 10 | 11 => Some(Self::Fall),
            _ => None,
        }
    }

    /// The season currently airing, with its year.
    pub fn current() -> (i32, Self) {
        let now = Utc::now();
        let season = Self::from_month(now.month()).unwrap_or(Self::Winter);
        // December belongs to the following year's winter cour
        let year = if now.month() == 12 {
            now.year() + 1
        } else {
            now.year()
        };
        (year, season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_autumn_alias() {
        assert_eq!(Season::parse("Fall"), Some(Season::Fall));
        assert_eq!(Season::parse("autumn"), Some(Season::Fall));
        assert_eq!(Season::parse("monsoon"), None);
    }

    #[test]
    fn test_from_month_covers_year() {
        assert_eq!(Season::from_month(1), Some(Season::Winter));
        assert_eq!(Season::from_month(4), Some(Season::Spring));
        assert_eq!(Season::from_month(7), Some(Season::Summer));
        assert_eq!(Season::from_month(10), Some(Season::Fall));
        assert_eq!(Season::from_month(13), None);
    }
}

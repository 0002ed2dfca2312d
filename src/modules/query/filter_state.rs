use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::modules::anime::AnimeType;

/// Type filter as selected in the UI. `All` means "do not filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Tv,
    Movie,
    Ova,
    Special,
    Ona,
    Music,
}

impl TypeFilter {
    /// The value sent to the remote API, or `None` when no filtering applies.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            TypeFilter::All => None,
            TypeFilter::Tv => Some("tv"),
            TypeFilter::Movie => Some("movie"),
            TypeFilter::Ova => Some("ova"),
            TypeFilter::Special => Some("special"),
            TypeFilter::Ona => Some("ona"),
            TypeFilter::Music => Some("music"),
        }
    }

    /// Case-insensitive match against an entry's reported type.
    pub fn matches(&self, anime_type: AnimeType) -> bool {
        match self.as_param() {
            None => true,
            Some(wanted) => anime_type.as_str().eq_ignore_ascii_case(wanted),
        }
    }
}

/// Sort key for result lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortKey {
    #[default]
    Score,
    Popularity,
}

impl SortKey {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Score => "score",
            SortKey::Popularity => "popularity",
        }
    }
}

/// Immutable snapshot of the user's filter selections.
///
/// A new snapshot replaces the previous one wholesale; downstream stages
/// never observe partial mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterState {
    pub term: String,
    pub kind: TypeFilter,
    pub sort_key: SortKey,
    pub genres: BTreeSet<String>,
    pub min_score: Option<f32>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn with_kind(mut self, kind: TypeFilter) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// True when every filter sits at its default and the term is empty.
    pub fn is_default(&self) -> bool {
        self.term.trim().is_empty()
            && self.kind == TypeFilter::All
            && self.sort_key == SortKey::Score
            && self.genres.is_empty()
            && self.effective_min_score().is_none()
    }

    /// Minimum score with invalid input coerced to "unset": non-finite or
    /// out-of-range values are treated as no filter at all.
    pub fn effective_min_score(&self) -> Option<f32> {
        self.min_score
            .filter(|s| s.is_finite() && (0.0..=10.0).contains(s))
    }
}

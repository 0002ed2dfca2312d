use crate::modules::anime::Anime;
use crate::modules::query::{FilterState, SortKey};

/// Popularity rank used for unranked entries so they sort last.
const UNRANKED_POPULARITY: i32 = i32::MAX;

/// Applies the filters a remote request could not express, in a fixed
/// precedence: type, then genre names, then minimum score, then sort.
///
/// The refiner is idempotent: refining an already-refined set with the same
/// filter yields the same set. It never fails; unknown or missing fields
/// fall back to neutral values (missing score counts as 0, missing
/// popularity sorts last).
pub struct ResultRefiner;

impl ResultRefiner {
    pub fn refine(raw: Vec<Anime>, filter: &FilterState) -> Vec<Anime> {
        let wanted_genres: Vec<String> = filter
            .genres
            .iter()
            .map(|name| name.to_lowercase())
            .collect();
        let min_score = filter.effective_min_score();

        let mut results: Vec<Anime> = raw
            .into_iter()
            .filter(|anime| filter.kind.matches(anime.anime_type))
            .filter(|anime| {
                if wanted_genres.is_empty() {
                    return true;
                }
                anime
                    .genre_names()
                    .any(|name| wanted_genres.iter().any(|w| w.eq_ignore_ascii_case(name)))
            })
            .filter(|anime| match min_score {
                Some(min) => anime.score.unwrap_or(0.0) >= min,
                None => true,
            })
            .collect();

        match filter.sort_key {
            SortKey::Score => {
                results.sort_by(|a, b| {
                    b.score
                        .unwrap_or(0.0)
                        .total_cmp(&a.score.unwrap_or(0.0))
                });
            }
            SortKey::Popularity => {
                results.sort_by_key(|a| a.popularity.unwrap_or(UNRANKED_POPULARITY));
            }
        }

        results
    }
}

use tracing::debug;

use crate::modules::provider::genres::GenreTaxonomy;

use super::descriptor::{RequestDescriptor, RequestKind};
use super::filter_state::{FilterState, TypeFilter};
use super::season::Season;

/// Minimum number of characters a non-empty search term must have before a
/// request is issued; the remote API rejects shorter queries.
pub const MIN_TERM_LEN: usize = 3;

/// Fixed per-request result limit.
pub const RESULT_LIMIT: usize = 20;

/// Which browsing surface the query is composed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    FreeSearch,
    TopList,
    Seasonal { year: i32, season: Season },
}

/// A request descriptor plus the residual filters the remote request could
/// not express, which the Result Refiner enforces client-side.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedQuery {
    pub descriptor: RequestDescriptor,
    pub residual: FilterState,
}

/// Outcome of query composition. The composer never fails; invalid or
/// pointless state combinations produce sentinel variants.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryPlan {
    Request(ComposedQuery),
    /// Term trimmed to one or two characters: suppressed, shown inline.
    TooShort,
    /// Default free-search state: nothing worth asking the API for.
    NoRequest,
}

pub struct QueryComposer;

impl QueryComposer {
    /// Deterministically turn a filter snapshot into a request descriptor,
    /// or decide that no request should be issued at all.
    pub fn compose(filter: &FilterState, mode: QueryMode, taxonomy: &GenreTaxonomy) -> QueryPlan {
        let term = filter.term.trim();

        if !term.is_empty() && term.chars().count() < MIN_TERM_LEN {
            return QueryPlan::TooShort;
        }

        if mode == QueryMode::FreeSearch && term.is_empty() && filter.is_default() {
            return QueryPlan::NoRequest;
        }

        let plan = match mode {
            QueryMode::FreeSearch => Self::compose_search(filter, term, taxonomy),
            QueryMode::TopList => Self::compose_top(filter),
            QueryMode::Seasonal { year, season } => Self::compose_seasonal(filter, year, season),
        };

        if let QueryPlan::Request(ref composed) = plan {
            debug!("Composed query {}", composed.descriptor.identity);
        }
        plan
    }

    fn compose_search(filter: &FilterState, term: &str, taxonomy: &GenreTaxonomy) -> QueryPlan {
        let mut params: Vec<(String, String)> = Vec::new();

        if !term.is_empty() {
            params.push(("q".to_string(), term.to_string()));
        }
        if let Some(kind) = filter.kind.as_param() {
            params.push(("type".to_string(), kind.to_string()));
        }

        // Genres the taxonomy can resolve are expressed server-side by id;
        // the rest stay behind for client-side name matching.
        let mut genre_ids: Vec<i64> = Vec::new();
        let mut unresolved: Vec<String> = Vec::new();
        for name in &filter.genres {
            match taxonomy.resolve(name) {
                Some(id) => genre_ids.push(id),
                None => unresolved.push(name.clone()),
            }
        }
        if !genre_ids.is_empty() {
            genre_ids.sort_unstable();
            let joined = genre_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            params.push(("genres".to_string(), joined));
        }

        params.push(("order_by".to_string(), filter.sort_key.as_param().to_string()));
        params.push(("sort".to_string(), "desc".to_string()));

        if let Some(min_score) = filter.effective_min_score() {
            params.push(("min_score".to_string(), format!("{}", min_score)));
        }

        params.push(("limit".to_string(), RESULT_LIMIT.to_string()));
        params.push(("sfw".to_string(), "true".to_string()));

        let residual = FilterState {
            term: String::new(),
            kind: TypeFilter::All,
            sort_key: filter.sort_key,
            genres: unresolved.into_iter().collect(),
            min_score: filter.effective_min_score(),
        };

        QueryPlan::Request(ComposedQuery {
            descriptor: RequestDescriptor::new(RequestKind::SearchQuery, params),
            residual,
        })
    }

    /// Curated top list: the endpoint cannot express type, genre, score or
    /// sort, so the full filter set is enforced client-side.
    fn compose_top(filter: &FilterState) -> QueryPlan {
        let params = vec![("limit".to_string(), RESULT_LIMIT.to_string())];
        QueryPlan::Request(ComposedQuery {
            descriptor: RequestDescriptor::new(RequestKind::TopList, params),
            residual: Self::residual_for_curated(filter),
        })
    }

    fn compose_seasonal(filter: &FilterState, year: i32, season: Season) -> QueryPlan {
        let params = vec![
            ("year".to_string(), year.to_string()),
            ("season".to_string(), season.as_str().to_string()),
            ("limit".to_string(), RESULT_LIMIT.to_string()),
        ];
        QueryPlan::Request(ComposedQuery {
            descriptor: RequestDescriptor::new(RequestKind::SeasonalList, params),
            residual: Self::residual_for_curated(filter),
        })
    }

    fn residual_for_curated(filter: &FilterState) -> FilterState {
        FilterState {
            term: String::new(),
            kind: filter.kind,
            sort_key: filter.sort_key,
            genres: filter.genres.clone(),
            min_score: filter.effective_min_score(),
        }
    }
}

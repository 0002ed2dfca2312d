//! Query orchestration and result-cache core for an anime catalog browser.
//!
//! The crate turns volatile filter input into a small number of well-timed
//! requests against the Jikan v4 API: debounced query composition, cached
//! lookups with last-write-wins semantics, concurrent detail aggregation,
//! and client-side refinement for filter combinations the remote API
//! cannot express. Presentation is out of scope; embedders consume
//! [`BrowseSession`] state transitions and the library services.

pub mod modules;
pub mod shared;

pub use modules::anime::{Anime, AnimeType, CharacterRole, Genre, RecommendationEntry};
pub use modules::browse::{BrowseConfig, BrowseService, BrowseSession, QueryOutcome, QueryState};
pub use modules::cache::EntityCache;
pub use modules::detail::{DetailService, EntityAggregate, FetchAggregator};
pub use modules::library::{
    CommentEntry, CommentsService, FavoriteEntry, FavoritesService, JsonFileStore, KeyValueStore,
    MemoryStore,
};
pub use modules::provider::{CatalogProvider, GenreTaxonomy, GenreTaxonomyService, JikanClient};
pub use modules::query::{
    FilterState, QueryComposer, QueryMode, QueryPlan, RequestDescriptor, RequestKind, Season,
    SortKey, TypeFilter,
};
pub use modules::refine::ResultRefiner;
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::logger::init_logger;

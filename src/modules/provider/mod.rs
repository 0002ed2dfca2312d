pub mod genres;
pub mod http_client;
pub mod jikan;
pub mod traits;

pub use genres::{GenreTaxonomy, GenreTaxonomyService};
pub use jikan::JikanClient;
pub use traits::CatalogProvider;

#[cfg(test)]
pub use traits::MockCatalogProvider;

pub mod comments;
pub mod favorites;
pub mod store;

pub use comments::{CommentEntry, CommentsService};
pub use favorites::{FavoriteEntry, FavoritesService, FAVORITES_KEY};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

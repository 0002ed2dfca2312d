pub mod errors; // Shared error types
pub mod utils; // Shared utilities

pub use errors::{AppError, AppResult};

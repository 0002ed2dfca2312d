pub mod config;
pub mod service;
pub mod session;

pub use config::BrowseConfig;
pub use service::{BrowseService, QueryOutcome};
pub use session::{BrowseSession, QueryState};

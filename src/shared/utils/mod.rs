pub mod debouncer;
pub mod logger;

pub use debouncer::Debouncer;

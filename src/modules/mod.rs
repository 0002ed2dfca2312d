pub mod anime;
pub mod browse;
pub mod cache;
pub mod detail;
pub mod library;
pub mod provider;
pub mod query;
pub mod refine;

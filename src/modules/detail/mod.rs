pub mod aggregator;
pub mod service;

pub use aggregator::{EntityAggregate, FetchAggregator};
pub use service::DetailService;

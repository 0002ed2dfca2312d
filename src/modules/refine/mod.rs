pub mod refiner;

pub use refiner::ResultRefiner;

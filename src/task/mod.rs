pub mod execution;
pub mod executor;

pub use execution::{FetchCompletion, FetchRequest};
pub use executor::{FetchExecutor, FetchSpawner};

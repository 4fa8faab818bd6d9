pub mod debounce;
pub mod effect;
pub mod runner;

pub use debounce::{Debounced, debounce};
pub use runner::Runtime;

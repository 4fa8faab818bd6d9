pub mod autocomplete;
pub mod inputs;
pub mod traits;

//! Terminal autocomplete for character names.
//!
//! Typing into the input debounces a lookup against `/api/characters`,
//! shows the matching names with the typed text highlighted, and a click on
//! a name copies it into the input.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod task;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use config::Config;
pub use crate::core::search::{Highlighted, SearchClient, highlight};
pub use error::{AppError, ConfigError, Result, SearchError};
pub use runtime::{Runtime, debounce};
pub use widgets::autocomplete::{Autocomplete, AutocompleteState, ListView, present};

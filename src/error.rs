use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while talking to the lookup endpoint.
///
/// These never reach the widget: the search client logs them and resolves
/// to "no result".
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("endpoint answered with HTTP status {0}")]
    Status(u16),

    #[error("failed to read response body: {0}")]
    Body(#[from] io::Error),

    #[error("response is not a JSON array of records: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Startup and terminal failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to open log file '{}': {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },

    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

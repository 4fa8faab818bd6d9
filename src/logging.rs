//! Tracing subscriber setup.
//!
//! The interactive widget owns the terminal, so logs only go to a file there.
//! Filter priority: `CHARSEARCH_LOG`, then `RUST_LOG`, then the CLI verbosity.

use crate::error::{AppError, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "CHARSEARCH_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Disabled,
}

impl LogTarget {
    /// A log file always wins; otherwise only non-interactive runs may use stderr.
    pub fn choose(log_file: Option<&Path>, interactive: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path.to_path_buf()),
            None if interactive => Self::Disabled,
            None => Self::Stderr,
        }
    }
}

pub fn init(verbosity: Verbosity, target: &LogTarget) -> Result<()> {
    let filter = build_env_filter(verbosity);

    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => {
            let stderr_is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(stderr_is_tty)
                .with_target(true)
                .without_time()
                .compact();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()?;
            Ok(())
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| AppError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::uptime());
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()?;
            Ok(())
        }
    }
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV)
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(verbosity.default_level().as_str().to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{LogTarget, Verbosity};
    use std::path::{Path, PathBuf};
    use tracing::Level;

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, true).default_level(), Level::ERROR);
        assert_eq!(Verbosity::from_flags(false, false).default_level(), Level::WARN);
    }

    #[test]
    fn interactive_runs_never_log_to_stderr() {
        assert_eq!(LogTarget::choose(None, true), LogTarget::Disabled);
        assert_eq!(LogTarget::choose(None, false), LogTarget::Stderr);
        assert_eq!(
            LogTarget::choose(Some(Path::new("/tmp/cs.log")), true),
            LogTarget::File(PathBuf::from("/tmp/cs.log"))
        );
    }
}

use crate::config::ConfigOverrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Look up character names as you type.
#[derive(Debug, Parser)]
#[command(name = "charsearch", version)]
pub struct Cli {
    /// YAML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the lookup server
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Quiet period before a search is sent
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Request timeout
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a single search and print the matches
    Query { text: String },
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            debounce_ms: self.debounce_ms,
            timeout_ms: self.timeout_ms,
            log_file: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use crate::config::ConfigOverrides;
    use clap::Parser;

    #[test]
    fn no_arguments_starts_interactive_mode() {
        let cli = Cli::try_parse_from(["charsearch"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.overrides(), ConfigOverrides::default());
    }

    #[test]
    fn flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "charsearch",
            "--endpoint",
            "http://localhost:9000",
            "--debounce-ms",
            "200",
        ])
        .expect("parse");
        let overrides = cli.overrides();
        assert_eq!(overrides.endpoint.as_deref(), Some("http://localhost:9000"));
        assert_eq!(overrides.debounce_ms, Some(200));
        assert_eq!(overrides.timeout_ms, None);
    }

    #[test]
    fn query_subcommand_takes_text() {
        let cli = Cli::try_parse_from(["charsearch", "-v", "query", "Stark"]).expect("parse");
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Command::Query { ref text }) if text == "Stark"));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["charsearch", "-v", "-q"]).is_err());
    }
}

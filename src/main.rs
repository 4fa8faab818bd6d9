use charsearch::cli::{Cli, Command};
use charsearch::core::search::Highlighter;
use charsearch::logging::{self, LogTarget, Verbosity};
use charsearch::terminal::{Terminal, write_span_line};
use charsearch::ui::theme::Theme;
use charsearch::widgets::autocomplete::NO_RESULTS_MESSAGE;
use charsearch::{App, Config, Result, Runtime, SearchClient};
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.overrides())?;
    let target = LogTarget::choose(config.log_file.as_deref(), cli.command.is_none());
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet), &target)?;
    info!(
        endpoint = %config.endpoint,
        debounce_ms = config.debounce_ms,
        timeout_ms = config.timeout_ms,
        "charsearch starting"
    );

    let client = SearchClient::from_config(&config);
    match cli.command {
        Some(Command::Query { text }) => print_matches(&client, &text),
        None => {
            let app = App::new(client, config.debounce());
            Runtime::new(app, Terminal::new()?).run()?;
            Ok(())
        }
    }
}

fn print_matches(client: &SearchClient, text: &str) -> Result<()> {
    let names = client.try_search(text)?;
    let mut stdout = io::stdout().lock();

    if names.is_empty() {
        writeln!(stdout, "{NO_RESULTS_MESSAGE}")?;
        return Ok(());
    }

    let styled = stdout.is_terminal();
    let theme = Theme::default();
    let highlighter = Highlighter::new(text);
    for name in &names {
        if styled {
            let spans = highlighter.apply(name).to_spans(theme.option, theme.highlight);
            write_span_line(&mut stdout, &spans, usize::MAX)?;
            writeln!(stdout)?;
        } else {
            writeln!(stdout, "{name}")?;
        }
    }
    Ok(())
}

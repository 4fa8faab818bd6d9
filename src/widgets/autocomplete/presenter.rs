use crate::core::search::{Highlighted, Highlighter};
use crate::ui::span::{Span, SpanLine};
use crate::ui::spinner::Spinner;
use crate::ui::theme::Theme;

pub const FETCHING_MESSAGE: &str = "Fetching options...";
pub const NO_RESULTS_MESSAGE: &str = "No results found";

const INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    /// Exact candidate string handed back on selection.
    pub value: String,
    pub highlighted: Highlighted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Fetching,
    NoResults,
    Options(Vec<OptionRow>),
}

/// Picks the list view for one render.
///
/// An empty query with no candidates yields an empty option list, not the
/// "no results" message.
pub fn present(query: &str, candidates: &[String], loading: bool) -> ListView {
    if loading {
        return ListView::Fetching;
    }
    if !query.is_empty() && candidates.is_empty() {
        return ListView::NoResults;
    }

    let highlighter = Highlighter::new(query);
    ListView::Options(
        candidates
            .iter()
            .map(|candidate| OptionRow {
                value: candidate.clone(),
                highlighted: highlighter.apply(candidate),
            })
            .collect(),
    )
}

impl ListView {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Fetching => Some(FETCHING_MESSAGE),
            Self::NoResults => Some(NO_RESULTS_MESSAGE),
            Self::Options(_) => None,
        }
    }

    pub fn rows(&self) -> &[OptionRow] {
        match self {
            Self::Options(rows) => rows,
            Self::Fetching | Self::NoResults => &[],
        }
    }

    /// Candidate shown on the given list line, if that line is an option.
    pub fn option_at(&self, line: usize) -> Option<&str> {
        self.rows().get(line).map(|row| row.value.as_str())
    }

    pub fn lines(&self, theme: &Theme, spinner: &Spinner) -> Vec<SpanLine> {
        match self {
            Self::Fetching => vec![vec![
                Span::new(INDENT),
                spinner.span(),
                Span::styled(format!(" {FETCHING_MESSAGE}"), theme.message),
            ]],
            Self::NoResults => vec![vec![
                Span::new(INDENT),
                Span::styled(NO_RESULTS_MESSAGE, theme.message),
            ]],
            Self::Options(rows) => rows
                .iter()
                .map(|row| {
                    let mut line = vec![Span::new(INDENT)];
                    line.extend(row.highlighted.to_spans(theme.option, theme.highlight));
                    line
                })
                .collect(),
        }
    }
}

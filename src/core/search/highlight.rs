//! Substring highlighting for option rows.
//!
//! Matches are kept as tagged segments instead of spliced markup, so a
//! candidate can never inject markup of its own. Escaping happens only when
//! the segments are turned into markup text.

use crate::ui::span::Span;
use crate::ui::style::Style;
use regex::{Regex, RegexBuilder};

pub const HIGHLIGHT_OPEN: &str = r#"<span class="ac-highlight" data-testid="ac-highlight">"#;
pub const HIGHLIGHT_CLOSE: &str = "</span>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Match(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Match(text) => text,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlighted {
    segments: Vec<Segment>,
}

impl Highlighted {
    pub fn plain(text: &str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Plain(text.to_string())]
        };
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn matches(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(|segment| segment.is_match())
            .map(Segment::text)
    }

    pub fn match_count(&self) -> usize {
        self.matches().count()
    }

    /// The candidate exactly as it was passed in.
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => escape_markup_into(text, &mut out),
                Segment::Match(text) => {
                    out.push_str(HIGHLIGHT_OPEN);
                    escape_markup_into(text, &mut out);
                    out.push_str(HIGHLIGHT_CLOSE);
                }
            }
        }
        out
    }

    pub fn to_spans(&self, base: Style, accent: Style) -> Vec<Span> {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Plain(text) => Span::styled(text.clone(), base),
                Segment::Match(text) => Span::styled(text.clone(), base.merge(accent)),
            })
            .collect()
    }
}

/// Compiled matcher for one query, reused across every candidate of a render.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        if query.is_empty() {
            return Self { pattern: None };
        }
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .ok();
        Self { pattern }
    }

    pub fn apply(&self, candidate: &str) -> Highlighted {
        let Some(pattern) = &self.pattern else {
            return Highlighted::plain(candidate);
        };

        let mut segments = Vec::new();
        let mut cursor = 0usize;
        for found in pattern.find_iter(candidate) {
            if found.start() > cursor {
                segments.push(Segment::Plain(candidate[cursor..found.start()].to_string()));
            }
            segments.push(Segment::Match(found.as_str().to_string()));
            cursor = found.end();
        }
        if cursor < candidate.len() {
            segments.push(Segment::Plain(candidate[cursor..].to_string()));
        }

        Highlighted { segments }
    }
}

pub fn highlight(query: &str, candidate: &str) -> Highlighted {
    Highlighter::new(query).apply(candidate)
}

fn escape_markup_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

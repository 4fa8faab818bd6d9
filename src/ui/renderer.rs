use crate::terminal::{CursorPos, TerminalSize};
use crate::ui::span::{Span, SpanLine};
use crate::ui::spinner::Spinner;
use crate::ui::theme::Theme;
use crate::widgets::autocomplete::Autocomplete;

pub const TITLE: &str = "Search Game Of Thrones Characters";
pub const SUBTITLE: &str = "Please enter part of the name you are looking for";
pub const HINT: &str = "Click a name to pick it · Esc to quit";

const HEADER_ROWS: u16 = 3;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

/// Lays out the page chrome around the autocomplete widget.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Frame rows above the widget's input line.
    pub fn widget_top(&self) -> u16 {
        HEADER_ROWS
    }

    pub fn render(&self, widget: &Autocomplete, spinner: &Spinner, size: TerminalSize) -> RenderFrame {
        let mut lines: Vec<SpanLine> = vec![
            vec![Span::styled(TITLE, self.theme.title)],
            vec![Span::styled(SUBTITLE, self.theme.subtitle)],
            Vec::new(),
        ];
        let top = HEADER_ROWS;

        let out = widget.draw(&self.theme, spinner);
        lines.extend(out.lines);

        let height = size.height as usize;
        if height > lines.len() + 1 {
            lines.push(Vec::new());
            lines.push(vec![Span::styled(HINT, self.theme.subtitle)]);
        }

        RenderFrame {
            lines,
            cursor: out.cursor.map(|cursor| CursorPos {
                col: cursor.col,
                row: top.saturating_add(cursor.row),
            }),
        }
    }
}

pub mod presenter;
pub mod state;

pub use presenter::{FETCHING_MESSAGE, ListView, NO_RESULTS_MESSAGE, OptionRow, present};
pub use state::AutocompleteState;

use crate::task::FetchCompletion;
use crate::terminal::{CursorPos, KeyCode, KeyEvent, KeyModifiers};
use crate::ui::span::{Span, SpanLine};
use crate::ui::spinner::Spinner;
use crate::ui::theme::Theme;
use crate::widgets::inputs::text_edit;
use crate::widgets::traits::{DrawOutput, InteractionResult};
use unicode_width::UnicodeWidthStr;

/// Text field with a suggestion list underneath.
///
/// Text edits go through `AutocompleteState::on_input_changed`; a click on an
/// option row goes through `AutocompleteState::on_option_selected`.
pub struct Autocomplete {
    state: AutocompleteState,
    cursor: usize,
    prompt: String,
    placeholder: String,
}

impl Autocomplete {
    pub fn new() -> Self {
        Self {
            state: AutocompleteState::new(),
            cursor: 0,
            prompt: "› ".to_string(),
            placeholder: String::new(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn state(&self) -> &AutocompleteState {
        &self.state
    }

    pub fn text(&self) -> &str {
        self.state.query()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('w') if ctrl => self.edit(text_edit::delete_word_left),
            KeyCode::Char('u') if ctrl => self.edit(|value, cursor| {
                if value.is_empty() {
                    return false;
                }
                value.clear();
                *cursor = 0;
                true
            }),
            KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.edit(|value, cursor| {
                    text_edit::insert_char(value, cursor, ch);
                    true
                })
            }
            KeyCode::Backspace => self.edit(text_edit::backspace_char),
            KeyCode::Delete => self.edit(text_edit::delete_char),
            KeyCode::Left => self.move_cursor(text_edit::move_left),
            KeyCode::Right => self.move_cursor(text_edit::move_right),
            KeyCode::Home => self.move_cursor(|cursor, _| {
                let moved = *cursor != 0;
                *cursor = 0;
                moved
            }),
            KeyCode::End => self.move_cursor(|cursor, value| {
                let end = text_edit::char_count(value);
                let moved = *cursor != end;
                *cursor = end;
                moved
            }),
            _ => InteractionResult::ignored(),
        }
    }

    /// `row` is relative to the widget: row 0 is the input line.
    pub fn on_click(&mut self, row: u16) -> InteractionResult {
        let Some(line) = (row as usize).checked_sub(1) else {
            return InteractionResult::ignored();
        };
        let Some(value) = self
            .state
            .view()
            .and_then(|view| view.option_at(line).map(str::to_string))
        else {
            return InteractionResult::ignored();
        };

        self.cursor = text_edit::char_count(&value);
        InteractionResult::with_effect(self.state.on_option_selected(value))
    }

    pub fn on_fetch_resolved(&mut self, completion: FetchCompletion) -> bool {
        self.state.on_fetch_resolved(completion)
    }

    pub fn draw(&self, theme: &Theme, spinner: &Spinner) -> DrawOutput {
        let mut input_line: SpanLine = vec![Span::styled(self.prompt.clone(), theme.prompt)];
        if self.state.query().is_empty() {
            if !self.placeholder.is_empty() {
                input_line.push(Span::styled(self.placeholder.clone(), theme.placeholder));
            }
        } else {
            input_line.push(Span::styled(self.state.query().to_string(), theme.input));
        }

        let before_cursor: String = self.state.query().chars().take(self.cursor).collect();
        let col = UnicodeWidthStr::width(self.prompt.as_str())
            + UnicodeWidthStr::width(before_cursor.as_str());

        let mut lines = vec![input_line];
        if let Some(view) = self.state.view() {
            lines.extend(view.lines(theme, spinner));
        }

        DrawOutput {
            lines,
            cursor: Some(CursorPos {
                col: col.min(u16::MAX as usize) as u16,
                row: 0,
            }),
        }
    }

    fn edit(&mut self, apply: impl FnOnce(&mut String, &mut usize) -> bool) -> InteractionResult {
        let mut value = self.state.query().to_string();
        let mut cursor = text_edit::clamp_cursor(self.cursor, &value);
        if !apply(&mut value, &mut cursor) {
            return InteractionResult::ignored();
        }
        self.cursor = cursor;
        InteractionResult::with_effect(self.state.on_input_changed(value))
    }

    fn move_cursor(&mut self, apply: impl FnOnce(&mut usize, &str) -> bool) -> InteractionResult {
        let mut cursor = self.cursor;
        if apply(&mut cursor, self.state.query()) {
            self.cursor = cursor;
            InteractionResult::handled()
        } else {
            InteractionResult::ignored()
        }
    }
}

impl Default for Autocomplete {
    fn default() -> Self {
        Self::new()
    }
}

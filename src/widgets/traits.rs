use crate::runtime::effect::Effect;
use crate::terminal::CursorPos;
use crate::ui::span::SpanLine;

#[derive(Debug, Clone, Default)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
    /// Cursor position relative to the first drawn line.
    pub cursor: Option<CursorPos>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
    pub effects: Vec<Effect>,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(effect: Effect) -> Self {
        Self {
            handled: true,
            request_render: true,
            effects: vec![effect],
        }
    }
}

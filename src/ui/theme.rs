use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub subtitle: Style,
    pub prompt: Style,
    pub input: Style,
    pub placeholder: Style,
    pub option: Style,
    pub highlight: Style,
    pub message: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::new().color(Color::Cyan).bold(),
            subtitle: Style::new().color(Color::DarkGrey),
            prompt: Style::new().color(Color::Green).bold(),
            input: Style::new(),
            placeholder: Style::new().color(Color::DarkGrey),
            option: Style::new().color(Color::White),
            highlight: Style::new().color(Color::Yellow).bold().underline(),
            message: Style::new().color(Color::DarkGrey),
        }
    }
}

pub mod backend;

pub use backend::{
    CursorPos, KeyCode, KeyEvent, KeyModifiers, Terminal, TerminalEvent, TerminalSize,
    write_span_line,
};

pub mod renderer;
pub mod span;
pub mod spinner;
pub mod style;
pub mod theme;

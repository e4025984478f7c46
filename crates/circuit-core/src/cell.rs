use crate::style::Style;

/// One character position on the terminal screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    /// An unstyled space.
    pub const BLANK: Self = Self::new(' ', Style::PLAIN);

    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

//! Error types for loading and tracing boards.

use std::io;

use crate::geom::Pos;
use crate::symbol::Symbol;

/// What is wrong with a board description.
///
/// Row and column numbers are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatErrorKind {
    #[error("input is empty, expected a `ROWS COLS` header")]
    MissingHeader,
    #[error("header must hold two positive integers `ROWS COLS`, found {found:?}")]
    BadHeader { found: String },
    #[error("row {row} is missing, expected {expected} rows")]
    MissingRow { row: usize, expected: usize },
    #[error("row {row} has {found} columns, expected {expected}")]
    TooFewColumns {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("row {row} has more than {expected} columns")]
    TooManyColumns { row: usize, expected: usize },
    #[error("row {row} column {col} holds {token:?}, which is more than one character")]
    TokenTooLong {
        row: usize,
        col: usize,
        token: String,
    },
    #[error("row {row} column {col} holds invalid symbol {ch:?}")]
    InvalidSymbol { row: usize, col: usize, ch: char },
    #[error("row {row} column {col} is a second start component (first at {first})")]
    DuplicateStart { row: usize, col: usize, first: Pos },
    #[error("row {row} column {col} is a second end component (first at {first})")]
    DuplicateEnd { row: usize, col: usize, first: Pos },
    #[error("board has no start component")]
    MissingStart,
    #[error("board has no end component")]
    MissingEnd,
    #[error("board has more than {expected} rows (extra row {row})")]
    TooManyRows { row: usize, expected: usize },
}

/// A malformed board description, tagged with the name of its source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{name}: {kind}")]
pub struct FormatError {
    pub name: String,
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub fn new(name: impl Into<String>, kind: FormatErrorKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Attempt to trace through a position that is not open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("row {}, col {} contains '{}'", .pos.row, .pos.col, found_char(.found))]
pub struct OccupiedPositionError {
    pub pos: Pos,
    /// What the position holds, `None` when it is off the board.
    pub found: Option<Symbol>,
}

fn found_char(found: &Option<Symbol>) -> char {
    found.map_or(' ', Symbol::as_char)
}

/// Serialized board data that does not describe a valid [`Board`](crate::Board).
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardDataError {
    #[error("a {rows}x{cols} board needs {expected} cells, found {found}")]
    CellCount {
        rows: i32,
        cols: i32,
        expected: usize,
        found: usize,
    },
    #[error("no {symbol} component at {expected}")]
    MissingComponent { symbol: Symbol, expected: Pos },
    #[error("stray {symbol} component at {pos}")]
    StrayComponent { symbol: Symbol, pos: Pos },
}

/// Failure to obtain a [`Board`](crate::Board) from a file.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("{name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

//! The [`Board`] type — an immutable grid of [`Symbol`]s with two
//! components to connect.
//!
//! A `Board` owns its storage. It is never edited in place: tracing a
//! position with [`mark_trace`](Board::mark_trace) returns a new board, so
//! the board read from disk stays available as the unsolved original.

use std::fmt;
use std::path::Path;

#[cfg(feature = "serde")]
use crate::error::BoardDataError;
use crate::error::{BoardError, FormatError, FormatErrorKind, OccupiedPositionError};
use crate::geom::{Dims, Pos};
use crate::symbol::Symbol;

/// A rectangular circuit board with exactly one start and one end component.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BoardData"))]
pub struct Board {
    dims: Dims,
    /// Row-major, `dims.area()` entries.
    cells: Vec<Symbol>,
    start: Pos,
    end: Pos,
}

impl Board {
    /// Read and parse a board file.
    ///
    /// The path's display form is used as the source name in errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| BoardError::Io {
            name: name.clone(),
            source,
        })?;
        let board = Self::parse(&name, &text)?;
        log::debug!(
            "loaded {name}: {}x{} board, start {}, end {}",
            board.rows(),
            board.cols(),
            board.start,
            board.end
        );
        Ok(board)
    }

    /// Parse a board description.
    ///
    /// The first line holds `ROWS COLS`. Each of the next `ROWS` lines holds
    /// `COLS` whitespace-separated single-character symbols from `O X 1 2`.
    /// Exactly one `1` and one `2` must be present. Blank lines after the
    /// last row are ignored; anything else there is an error.
    pub fn parse(name: &str, text: &str) -> Result<Self, FormatError> {
        let fail = |kind| FormatError::new(name, kind);

        let mut lines = text.lines();
        let header = lines.next().ok_or_else(|| fail(FormatErrorKind::MissingHeader))?;
        let (rows, cols) = parse_header(header).ok_or_else(|| {
            fail(FormatErrorKind::BadHeader {
                found: header.trim().to_string(),
            })
        })?;

        let dims = Dims::new(rows as i32, cols as i32);
        let mut cells = Vec::with_capacity(dims.area().min(text.len()));
        let mut start: Option<Pos> = None;
        let mut end: Option<Pos> = None;

        for row in 0..rows {
            let line = lines.next().ok_or_else(|| {
                fail(FormatErrorKind::MissingRow {
                    row,
                    expected: rows,
                })
            })?;
            let mut tokens = line.split_whitespace();
            for col in 0..cols {
                let token = tokens.next().ok_or_else(|| {
                    fail(FormatErrorKind::TooFewColumns {
                        row,
                        found: col,
                        expected: cols,
                    })
                })?;
                let mut chars = token.chars();
                let (Some(ch), None) = (chars.next(), chars.next()) else {
                    return Err(fail(FormatErrorKind::TokenTooLong {
                        row,
                        col,
                        token: token.to_string(),
                    }));
                };
                let symbol = Symbol::from_char(ch)
                    .filter(|s| s.is_input())
                    .ok_or_else(|| fail(FormatErrorKind::InvalidSymbol { row, col, ch }))?;

                let here = Pos::new(row as i32, col as i32);
                match symbol {
                    Symbol::Start => {
                        if let Some(first) = start {
                            return Err(fail(FormatErrorKind::DuplicateStart { row, col, first }));
                        }
                        start = Some(here);
                    }
                    Symbol::End => {
                        if let Some(first) = end {
                            return Err(fail(FormatErrorKind::DuplicateEnd { row, col, first }));
                        }
                        end = Some(here);
                    }
                    _ => {}
                }
                cells.push(symbol);
            }
            if tokens.next().is_some() {
                return Err(fail(FormatErrorKind::TooManyColumns {
                    row,
                    expected: cols,
                }));
            }
        }

        let start = start.ok_or_else(|| fail(FormatErrorKind::MissingStart))?;
        let end = end.ok_or_else(|| fail(FormatErrorKind::MissingEnd))?;

        if let Some(extra) = lines.position(|l| !l.trim().is_empty()) {
            return Err(fail(FormatErrorKind::TooManyRows {
                row: rows + extra,
                expected: rows,
            }));
        }

        Ok(Self {
            dims,
            cells,
            start,
            end,
        })
    }

    /// Board dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// Position of the `1` component.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// Position of the `2` component.
    #[inline]
    pub fn end(&self) -> Pos {
        self.end
    }

    #[inline]
    pub fn is_start(&self, p: Pos) -> bool {
        self.start == p
    }

    #[inline]
    pub fn is_end(&self, p: Pos) -> bool {
        self.end == p
    }

    /// Symbol at `p`, or `None` if `p` is off the board.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<Symbol> {
        self.dims.index(p).map(|i| self.cells[i])
    }

    /// Whether a trace may be laid at `p`: on the board and [`Symbol::Open`].
    ///
    /// Off-board positions are simply not open.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        self.at(p) == Some(Symbol::Open)
    }

    /// Return a copy of this board with `p` marked as [`Symbol::Trace`].
    ///
    /// Fails if `p` is not open (already traced, blocked, a component, or
    /// off the board).
    pub fn mark_trace(&self, p: Pos) -> Result<Board, OccupiedPositionError> {
        let mut next = self.clone();
        next.set_trace(p)?;
        Ok(next)
    }

    fn set_trace(&mut self, p: Pos) -> Result<(), OccupiedPositionError> {
        match self.dims.index(p) {
            Some(i) if self.cells[i] == Symbol::Open => {
                self.cells[i] = Symbol::Trace;
                Ok(())
            }
            idx => Err(OccupiedPositionError {
                pos: p,
                found: idx.map(|i| self.cells[i]),
            }),
        }
    }

    /// Positions currently marked [`Symbol::Trace`], row-major.
    pub fn traced(&self) -> impl Iterator<Item = Pos> + '_ {
        self.iter()
            .filter(|&(_, s)| s == Symbol::Trace)
            .map(|(p, _)| p)
    }

    /// Row-major iterator over `(Pos, Symbol)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Symbol)> + '_ {
        self.dims.iter().zip(self.cells.iter().copied())
    }

    /// Row-major text: each symbol followed by a space, one row per line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Serialized form of a [`Board`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BoardData {
    dims: Dims,
    cells: Vec<Symbol>,
    start: Pos,
    end: Pos,
}

#[cfg(feature = "serde")]
impl TryFrom<BoardData> for Board {
    type Error = BoardDataError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        let BoardData {
            dims,
            cells,
            start,
            end,
        } = data;
        if cells.len() != dims.area() {
            return Err(BoardDataError::CellCount {
                rows: dims.rows,
                cols: dims.cols,
                expected: dims.area(),
                found: cells.len(),
            });
        }
        let board = Board {
            dims,
            cells,
            start,
            end,
        };
        for (symbol, expected) in [(Symbol::Start, start), (Symbol::End, end)] {
            if board.at(expected) != Some(symbol) {
                return Err(BoardDataError::MissingComponent { symbol, expected });
            }
        }
        let stray = board.iter().find(|&(p, s)| {
            (s == Symbol::Start && p != start) || (s == Symbol::End && p != end)
        });
        if let Some((pos, symbol)) = stray {
            return Err(BoardDataError::StrayComponent { symbol, pos });
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dims.cols.max(1) as usize) {
            for s in row {
                write!(f, "{s} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse `ROWS COLS`, both strictly positive.
fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut it = line.split_whitespace();
    let rows = it.next()?.parse::<usize>().ok()?;
    let cols = it.next()?.parse::<usize>().ok()?;
    let limit = i32::MAX as usize;
    if it.next().is_some() || rows == 0 || cols == 0 || rows > limit || cols > limit {
        return None;
    }
    Some((rows, cols))
}

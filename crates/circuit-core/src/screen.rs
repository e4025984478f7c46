//! The [`Screen`] type — an owned buffer of styled [`Cell`]s — and the
//! [`Frame`] diff sent to drivers.

use crate::cell::Cell;
use crate::geom::{Dims, Pos};
use crate::style::Style;

/// A rectangular buffer of styled cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    dims: Dims,
    cells: Vec<Cell>,
}

impl Screen {
    /// Create a screen of `dims`, filled with blank cells.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            cells: vec![Cell::default(); dims.area()],
        }
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Read the cell at `p`. Off-screen positions read as blank.
    pub fn at(&self, p: Pos) -> Cell {
        self.dims
            .index(p)
            .map(|i| self.cells[i])
            .unwrap_or_default()
    }

    /// Set the cell at `p`. No-op if `p` is off-screen.
    pub fn set(&mut self, p: Pos, cell: Cell) {
        if let Some(i) = self.dims.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Fill every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write `text` left to right starting at `p`, clipped at the right
    /// edge. Returns the number of cells written.
    pub fn text(&mut self, p: Pos, text: &str, style: Style) -> usize {
        let mut n = 0;
        for (i, ch) in text.chars().enumerate() {
            let at = p.shift(0, i as i32);
            if !self.dims.contains(at) {
                break;
            }
            self.set(at, Cell::new(ch, style));
            n += 1;
        }
        n
    }

    /// Row-major iterator over `(Pos, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.dims.iter().zip(self.cells.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub cell: Cell,
    pub pos: Pos,
}

/// A set of cell changes.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    /// Every cell of the screen is included; anything drawn before is stale.
    pub full: bool,
}

/// Compute the cells of `curr` that differ from `prev`.
///
/// If the two screens have different dimensions the frame is full: every
/// cell of `curr` is included.
pub fn compute_frame(prev: &Screen, curr: &Screen) -> Frame {
    let full = prev.dims() != curr.dims();
    let cells = curr
        .iter()
        .filter(|&(p, c)| full || prev.at(p) != c)
        .map(|(pos, cell)| FrameCell { cell, pos })
        .collect();
    Frame { cells, full }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut s = Screen::new(Dims::new(3, 4));
        s.set(Pos::new(1, 2), Cell::new('X', Style::PLAIN));
        assert_eq!(s.at(Pos::new(1, 2)).ch, 'X');
        assert_eq!(s.at(Pos::new(10, 10)), Cell::default());
        // off-screen writes are ignored
        s.set(Pos::new(-1, 0), Cell::new('Y', Style::PLAIN));
    }

    #[test]
    fn text_clips_at_edge() {
        let mut s = Screen::new(Dims::new(1, 4));
        let n = s.text(Pos::new(0, 1), "hello", Style::default());
        assert_eq!(n, 3);
        let row: String = s.iter().map(|(_, c)| c.ch).collect();
        assert_eq!(row, " hel");
    }

    #[test]
    fn frame_contains_only_changes() {
        let a = Screen::new(Dims::new(2, 3));
        let mut b = a.clone();
        b.set(Pos::new(0, 1), Cell::new('A', Style::PLAIN));
        let frame = compute_frame(&a, &b);
        assert!(!frame.full);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!(frame.cells[0].pos, Pos::new(0, 1));
        assert_eq!(frame.cells[0].cell.ch, 'A');
    }

    #[test]
    fn resized_frame_is_full() {
        let a = Screen::new(Dims::new(1, 1));
        let b = Screen::new(Dims::new(2, 2));
        let frame = compute_frame(&a, &b);
        assert!(frame.full);
        assert_eq!(frame.cells.len(), 4);
    }
}

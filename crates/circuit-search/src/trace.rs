//! [`TraceState`] — one partial trace explored by the search.

use std::rc::Rc;

use circuit_core::{Board, OccupiedPositionError, Pos};

/// One link of the traced-position list, shared between a state and all
/// of its descendants.
#[derive(Debug)]
struct PathLink {
    pos: Pos,
    prev: Option<Rc<PathLink>>,
}

impl Drop for PathLink {
    // Unlink iteratively so dropping a long trace cannot overflow the stack.
    fn drop(&mut self) {
        let mut prev = self.prev.take();
        while let Some(rc) = prev {
            prev = match Rc::try_unwrap(rc) {
                Ok(mut link) => link.prev.take(),
                Err(_) => None,
            };
        }
    }
}

/// A partial trace: a private copy of the board with every traced
/// position marked, plus the position the trace currently ends at.
///
/// States are never modified. Extending a trace produces a new state with
/// its own board copy, so sibling branches of the search cannot see each
/// other's traces.
#[derive(Clone, Debug)]
pub struct TraceState {
    board: Board,
    pos: Pos,
    len: usize,
    path: Rc<PathLink>,
}

impl TraceState {
    /// Start a trace at `p`, a neighbour of the board's start component.
    pub fn new(board: &Board, p: Pos) -> Result<Self, OccupiedPositionError> {
        Ok(Self {
            board: board.mark_trace(p)?,
            pos: p,
            len: 1,
            path: Rc::new(PathLink { pos: p, prev: None }),
        })
    }

    /// Extend this trace by one position.
    ///
    /// Fails if `p` is not open on this state's board.
    pub fn extend(&self, p: Pos) -> Result<Self, OccupiedPositionError> {
        debug_assert!(self.pos.is_adjacent(p), "{p} is not next to {}", self.pos);
        Ok(Self {
            board: self.board.mark_trace(p)?,
            pos: p,
            len: self.len + 1,
            path: Rc::new(PathLink {
                pos: p,
                prev: Some(Rc::clone(&self.path)),
            }),
        })
    }

    /// Whether the trace has reached the end component, i.e. its current
    /// position is orthogonally adjacent to it.
    #[inline]
    pub fn is_solution(&self) -> bool {
        self.pos.is_adjacent(self.board.end())
    }

    /// Whether `p` is open on this state's board.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        self.board.is_open(p)
    }

    /// Number of traced positions.
    #[inline]
    pub fn path_length(&self) -> usize {
        self.len
    }

    /// Current end of the trace.
    #[inline]
    pub fn position(&self) -> Pos {
        self.pos
    }

    /// This state's board, with the trace marked.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Traced positions in the order they were laid, starting next to the
    /// start component.
    pub fn path(&self) -> Vec<Pos> {
        let mut out = Vec::with_capacity(self.len);
        let mut link = Some(&self.path);
        while let Some(l) = link {
            out.push(l.pos);
            link = l.prev.as_ref();
        }
        out.reverse();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuit_core::Symbol;

    fn board() -> Board {
        Board::parse("t", "3 3\n1 O O\nO X O\nO O 2\n").unwrap()
    }

    #[test]
    fn new_marks_first_position() {
        let b = board();
        let s = TraceState::new(&b, Pos::new(0, 1)).unwrap();
        assert_eq!(s.path_length(), 1);
        assert_eq!(s.position(), Pos::new(0, 1));
        assert_eq!(s.board().at(Pos::new(0, 1)), Some(Symbol::Trace));
        assert!(!s.is_open(Pos::new(0, 1)));
        assert!(s.is_open(Pos::new(0, 2)));
        // the original board is untouched
        assert!(b.is_open(Pos::new(0, 1)));
    }

    #[test]
    fn extend_builds_path() {
        let s = TraceState::new(&board(), Pos::new(0, 1)).unwrap();
        let s = s.extend(Pos::new(0, 2)).unwrap();
        let s = s.extend(Pos::new(1, 2)).unwrap();
        assert_eq!(s.path_length(), 3);
        assert_eq!(
            s.path(),
            vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 2)]
        );
        assert_eq!(s.board().traced().count(), 3);
        assert!(s.is_solution());
    }

    #[test]
    fn siblings_are_isolated() {
        let b = Board::parse("t", "3 3\nO O O\nO 1 O\nO O 2\n").unwrap();
        let parent = TraceState::new(&b, Pos::new(0, 1)).unwrap();
        let left = parent.extend(Pos::new(0, 0)).unwrap();
        let right = parent.extend(Pos::new(0, 2)).unwrap();

        assert_eq!(parent.board().traced().count(), 1);
        assert!(left.is_open(Pos::new(0, 2)));
        assert!(right.is_open(Pos::new(0, 0)));
        assert!(parent.is_open(Pos::new(0, 0)));
        assert!(parent.is_open(Pos::new(0, 2)));
        assert_eq!(left.path(), vec![Pos::new(0, 1), Pos::new(0, 0)]);
        assert_eq!(right.path(), vec![Pos::new(0, 1), Pos::new(0, 2)]);
    }

    #[test]
    fn extend_rejects_occupied() {
        let s = TraceState::new(&board(), Pos::new(1, 0)).unwrap();
        let err = s.extend(Pos::new(1, 1)).unwrap_err();
        assert_eq!(err.found, Some(Symbol::Blocked));
        assert!(TraceState::new(&board(), Pos::new(0, 0)).is_err());
    }

    #[test]
    fn solution_means_next_to_end() {
        let s = TraceState::new(&board(), Pos::new(1, 0)).unwrap();
        assert!(!s.is_solution());
        let s = s.extend(Pos::new(2, 0)).unwrap();
        assert!(!s.is_solution());
        let s = s.extend(Pos::new(2, 1)).unwrap();
        assert!(s.is_solution());
    }
}

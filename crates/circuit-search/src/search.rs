//! The exhaustive trace search driven by a [`Frontier`].

use circuit_core::{Board, OccupiedPositionError};

use crate::frontier::{Discipline, EmptyFrontier, Frontier};
use crate::neighbors::Neighbors;
use crate::solutions::{Offer, Solutions};
use crate::trace::TraceState;

/// Broken internal contract during a search. Never caused by board content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("trace through a checked position failed: {0}")]
    Occupied(#[from] OccupiedPositionError),
    #[error(transparent)]
    Empty(#[from] EmptyFrontier),
}

/// Counters collected over one run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose neighbours were expanded.
    pub expanded: usize,
    /// States stored in the frontier.
    pub stored: usize,
    /// Completed traces retrieved, kept or not.
    pub solutions_seen: usize,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

/// Result of [`Tracer::run`].
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Every shortest trace, in discovery order. Empty if the components
    /// cannot be connected.
    pub solutions: Vec<TraceState>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Length shared by all solutions.
    pub fn best_len(&self) -> Option<usize> {
        self.solutions.first().map(TraceState::path_length)
    }
}

/// Finds every shortest trace between a board's two components.
///
/// Every reachable partial trace is explored; the [`Discipline`] only
/// changes the order, not the solutions found.
#[derive(Copy, Clone, Debug)]
pub struct Tracer {
    discipline: Discipline,
}

impl Tracer {
    pub fn new(discipline: Discipline) -> Self {
        Self { discipline }
    }

    #[inline]
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Run the search to completion on `board`.
    pub fn run(&self, board: &Board) -> Result<SearchOutcome, SearchError> {
        log::debug!(
            "tracing {}x{} board from {} to {} using a {}",
            board.rows(),
            board.cols(),
            board.start(),
            board.end(),
            self.discipline
        );

        let mut frontier = Frontier::new(self.discipline);
        let mut stats = SearchStats::default();
        let mut solutions = Solutions::new();
        let mut nb = Neighbors::new();

        for &p in nb.cardinal(board.start(), |p| board.is_open(p)) {
            frontier.store(TraceState::new(board, p)?);
            stats.stored += 1;
        }
        stats.peak_frontier = frontier.len();

        while !frontier.is_empty() {
            let state = frontier.retrieve()?;

            if state.is_solution() {
                stats.solutions_seen += 1;
                let len = state.path_length();
                match solutions.offer(state) {
                    Offer::Added => log::trace!("kept trace of length {len}"),
                    Offer::Replaced { discarded } => {
                        log::trace!("trace of length {len} replaces {discarded} longer")
                    }
                    Offer::Rejected => {}
                }
                continue;
            }

            stats.expanded += 1;
            for &p in nb.cardinal(state.position(), |p| state.is_open(p)) {
                frontier.store(state.extend(p)?);
                stats.stored += 1;
            }
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }

        log::debug!(
            "search done: {} solutions of length {:?}; {} expanded, {} stored, peak frontier {}",
            solutions.len(),
            solutions.best_len(),
            stats.expanded,
            stats.stored,
            stats.peak_frontier
        );

        Ok(SearchOutcome {
            solutions: solutions.into_vec(),
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::shortest_distance;
    use circuit_core::{Pos, Symbol};
    use std::collections::HashSet;

    const BOTH: [Discipline; 2] = [Discipline::Stack, Discipline::Queue];

    fn board(text: &str) -> Board {
        Board::parse("t", text).unwrap()
    }

    fn solve(b: &Board, d: Discipline) -> SearchOutcome {
        Tracer::new(d).run(b).unwrap()
    }

    /// Solution paths in a discovery-order-independent form.
    fn path_set(out: &SearchOutcome) -> Vec<Vec<Pos>> {
        let mut v: Vec<_> = out.solutions.iter().map(TraceState::path).collect();
        v.sort();
        v
    }

    /// Asserts `s` is a simple orthogonal path over open cells of `b` from
    /// a start neighbour to an end neighbour, and that its board marks
    /// exactly those cells.
    pub(crate) fn assert_valid_trace(b: &Board, s: &TraceState) {
        let path = s.path();
        assert_eq!(path.len(), s.path_length());
        assert!(path[0].is_adjacent(b.start()));
        assert!(path[path.len() - 1].is_adjacent(b.end()));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {}", w[0], w[1]);
        }
        let cells: HashSet<Pos> = path.iter().copied().collect();
        assert_eq!(cells.len(), path.len(), "path revisits a cell");
        for p in &path {
            assert_eq!(b.at(*p), Some(Symbol::Open));
        }
        let traced: HashSet<Pos> = s.board().traced().collect();
        assert_eq!(traced, cells);
    }

    #[test]
    fn straight_down_the_middle() {
        let b = board("3 3\n1 O X\nX O X\nX O 2\n");
        for d in BOTH {
            let out = solve(&b, d);
            assert_eq!(out.solutions.len(), 1);
            let s = &out.solutions[0];
            assert_eq!(s.path_length(), 3);
            assert_eq!(
                s.path(),
                vec![Pos::new(0, 1), Pos::new(1, 1), Pos::new(2, 1)]
            );
            assert_eq!(s.board().render(), "1 T X \nX T X \nX T 2 \n");
        }
    }

    #[test]
    fn two_routes_around_a_block() {
        let b = board("3 3\n1 O O\nO X O\nO O 2\n");
        for d in BOTH {
            let out = solve(&b, d);
            assert_eq!(out.solutions.len(), 2);
            assert!(out.solutions.iter().all(|s| s.path_length() == 3));
            assert_eq!(
                path_set(&out),
                vec![
                    vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 2)],
                    vec![Pos::new(1, 0), Pos::new(2, 0), Pos::new(2, 1)],
                ]
            );
        }
    }

    #[test]
    fn longer_traces_are_dropped() {
        let b = board("2 4\n1 O O O\nO O O 2\n");
        for d in BOTH {
            let out = solve(&b, d);
            assert_eq!(out.best_len(), Some(3));
            assert_eq!(out.solutions.len(), 4);
            assert!(out.stats.solutions_seen > out.solutions.len());
            for s in &out.solutions {
                assert_valid_trace(&b, s);
            }
        }
    }

    #[test]
    fn disconnected_board_has_no_solutions() {
        let b = board("3 3\n1 O X\nO X O\nX O 2\n");
        for d in BOTH {
            let out = solve(&b, d);
            assert!(out.solutions.is_empty());
            assert_eq!(out.best_len(), None);
            assert!(out.stats.expanded > 0);
        }
    }

    #[test]
    fn walled_in_start_has_no_solutions() {
        let b = board("2 2\n1 X\nX 2\n");
        let out = solve(&b, Discipline::Stack);
        assert!(out.solutions.is_empty());
        assert_eq!(out.stats, SearchStats::default());
    }

    #[test]
    fn adjacent_components_still_need_a_trace() {
        let b = board("1 2\n1 2\n");
        assert!(solve(&b, Discipline::Queue).solutions.is_empty());

        let b = board("2 2\n1 2\nO O\n");
        let out = solve(&b, Discipline::Queue);
        assert_eq!(out.solutions.len(), 1);
        assert_eq!(out.solutions[0].path(), vec![Pos::new(1, 0), Pos::new(1, 1)]);
    }

    #[test]
    fn disciplines_find_the_same_set() {
        let b = board("4 4\n1 O O O\nO X O O\nO O O X\nO X O 2\n");
        let stack = solve(&b, Discipline::Stack);
        let queue = solve(&b, Discipline::Queue);
        assert!(!stack.solutions.is_empty());
        assert_eq!(path_set(&stack), path_set(&queue));
        assert_eq!(stack.best_len(), shortest_distance(&b));
        // Both orders visit every reachable state exactly once.
        assert_eq!(stack.stats.stored, queue.stats.stored);
        assert_eq!(stack.stats.expanded, queue.stats.expanded);
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let b = board("3 4\n1 O O O\nO O X O\nO O O 2\n");
        for d in BOTH {
            let first: Vec<_> = solve(&b, d).solutions.iter().map(TraceState::path).collect();
            let second: Vec<_> = solve(&b, d).solutions.iter().map(TraceState::path).collect();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn original_board_is_untouched() {
        let b = board("3 3\n1 O O\nO X O\nO O 2\n");
        let before = b.clone();
        let _ = solve(&b, Discipline::Stack);
        assert_eq!(b, before);
        assert_eq!(b.traced().count(), 0);
    }
}

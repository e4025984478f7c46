//! [`Solutions`] — the set of best traces found so far.

use crate::trace::TraceState;

/// What [`Solutions::offer`] did with a trace.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Offer {
    /// Kept alongside the existing traces of equal length.
    Added,
    /// Shorter than everything kept so far; the `discarded` traces were dropped.
    Replaced { discarded: usize },
    /// Longer than the best known length; dropped.
    Rejected,
}

/// Every completed trace of the smallest length seen so far.
#[derive(Clone, Debug, Default)]
pub struct Solutions {
    best: Option<usize>,
    states: Vec<TraceState>,
}

impl Solutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a completed trace.
    ///
    /// It is kept if it ties the best length, replaces every kept trace if
    /// it is strictly shorter, and is dropped if it is longer.
    pub fn offer(&mut self, state: TraceState) -> Offer {
        let len = state.path_length();
        match self.best {
            Some(best) if len > best => Offer::Rejected,
            Some(best) if len == best => {
                self.states.push(state);
                Offer::Added
            }
            Some(_) => {
                let discarded = self.states.len();
                self.states.clear();
                self.states.push(state);
                self.best = Some(len);
                Offer::Replaced { discarded }
            }
            None => {
                self.states.push(state);
                self.best = Some(len);
                Offer::Added
            }
        }
    }

    /// Length shared by every kept trace.
    #[inline]
    pub fn best_len(&self) -> Option<usize> {
        self.best
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Kept traces, in the order they were found.
    pub fn into_vec(self) -> Vec<TraceState> {
        self.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuit_core::{Board, Pos};

    /// A 1-row corridor; `state(n)` is a trace of length `n` heading right.
    fn state(n: usize) -> TraceState {
        let board = Board::parse("t", "1 8\n1 O O O O O O 2\n").unwrap();
        let mut s = TraceState::new(&board, Pos::new(0, 1)).unwrap();
        for col in 2..=n as i32 {
            s = s.extend(Pos::new(0, col)).unwrap();
        }
        s
    }

    #[test]
    fn first_offer_sets_best() {
        let mut sols = Solutions::new();
        assert!(sols.is_empty());
        assert_eq!(sols.best_len(), None);
        assert_eq!(sols.offer(state(4)), Offer::Added);
        assert_eq!(sols.best_len(), Some(4));
    }

    #[test]
    fn ties_are_kept() {
        let mut sols = Solutions::new();
        sols.offer(state(3));
        assert_eq!(sols.offer(state(3)), Offer::Added);
        assert_eq!(sols.len(), 2);
    }

    #[test]
    fn shorter_replaces_all() {
        let mut sols = Solutions::new();
        sols.offer(state(5));
        sols.offer(state(5));
        assert_eq!(sols.offer(state(2)), Offer::Replaced { discarded: 2 });
        assert_eq!(sols.len(), 1);
        assert_eq!(sols.best_len(), Some(2));
    }

    #[test]
    fn longer_is_rejected() {
        let mut sols = Solutions::new();
        sols.offer(state(2));
        assert_eq!(sols.offer(state(3)), Offer::Rejected);
        assert_eq!(sols.len(), 1);
        let kept = sols.into_vec();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].path_length(), 2);
    }
}

//! [`Frontier`] — pending work, retrieved last-in-first-out or
//! first-in-first-out.

use std::collections::VecDeque;
use std::fmt;

/// Retrieval order of a [`Frontier`], fixed for its lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Discipline {
    /// Last in, first out (depth-first exploration).
    Stack,
    /// First in, first out (breadth-first exploration).
    Queue,
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
        })
    }
}

/// [`Frontier::retrieve`] was called on an empty frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("retrieve from an empty {0} frontier")]
pub struct EmptyFrontier(pub Discipline);

/// A synchronous container of items awaiting exploration.
#[derive(Clone, Debug)]
pub enum Frontier<T> {
    Stack(Vec<T>),
    Queue(VecDeque<T>),
}

impl<T> Frontier<T> {
    /// Create an empty frontier with the given discipline.
    pub fn new(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Stack => Self::Stack(Vec::new()),
            Discipline::Queue => Self::Queue(VecDeque::new()),
        }
    }

    #[inline]
    pub fn discipline(&self) -> Discipline {
        match self {
            Self::Stack(_) => Discipline::Stack,
            Self::Queue(_) => Discipline::Queue,
        }
    }

    /// Add an item.
    pub fn store(&mut self, item: T) {
        match self {
            Self::Stack(v) => v.push(item),
            Self::Queue(q) => q.push_back(item),
        }
    }

    /// Remove the next item: the most recently stored one for
    /// [`Discipline::Stack`], the least recently stored one for
    /// [`Discipline::Queue`].
    pub fn retrieve(&mut self) -> Result<T, EmptyFrontier> {
        let item = match self {
            Self::Stack(v) => v.pop(),
            Self::Queue(q) => q.pop_front(),
        };
        item.ok_or(EmptyFrontier(self.discipline()))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Stack(v) => v.len(),
            Self::Queue(q) => q.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut f: Frontier<u32>) -> Vec<u32> {
        let mut out = Vec::new();
        while !f.is_empty() {
            out.push(f.retrieve().unwrap());
        }
        out
    }

    fn filled(d: Discipline) -> Frontier<u32> {
        let mut f = Frontier::new(d);
        for i in 1..=3 {
            f.store(i);
        }
        f
    }

    #[test]
    fn stack_is_lifo() {
        assert_eq!(drain(filled(Discipline::Stack)), vec![3, 2, 1]);
    }

    #[test]
    fn queue_is_fifo() {
        assert_eq!(drain(filled(Discipline::Queue)), vec![1, 2, 3]);
    }

    #[test]
    fn interleaved_store_and_retrieve() {
        let mut s = filled(Discipline::Stack);
        let mut q = filled(Discipline::Queue);
        assert_eq!(s.retrieve(), Ok(3));
        assert_eq!(q.retrieve(), Ok(1));
        s.store(9);
        q.store(9);
        assert_eq!(drain(s), vec![9, 2, 1]);
        assert_eq!(drain(q), vec![2, 3, 9]);
    }

    #[test]
    fn empty_retrieve_fails() {
        let mut f: Frontier<u32> = Frontier::new(Discipline::Queue);
        assert!(f.is_empty());
        assert_eq!(f.retrieve(), Err(EmptyFrontier(Discipline::Queue)));
        assert_eq!(
            EmptyFrontier(Discipline::Stack).to_string(),
            "retrieve from an empty stack frontier"
        );
    }

    #[test]
    fn len_and_discipline() {
        let f = filled(Discipline::Queue);
        assert_eq!(f.len(), 3);
        assert_eq!(f.discipline(), Discipline::Queue);
    }
}

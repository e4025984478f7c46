//! All-shortest-traces search for circuit boards.
//!
//! [`Tracer`] explores every partial trace reachable from a board's start
//! component and keeps all completed traces of minimum length:
//!
//! - **Trace states** ([`TraceState`]) own a private board copy, so
//!   branches never interfere.
//! - **Frontier** ([`Frontier`]) stores pending states as a stack or a
//!   queue, chosen by [`Discipline`]. The discipline changes the
//!   exploration order but never the solutions.
//! - **Solutions** ([`Solutions`]) keeps the ties for the shortest length
//!   and drops everything longer.
//!
//! [`shortest_distance`] is an independent breadth-first check of the
//! shortest achievable length.

mod bfs;
mod frontier;
mod neighbors;
mod search;
mod solutions;
mod trace;

pub use bfs::shortest_distance;
pub use frontier::{Discipline, EmptyFrontier, Frontier};
pub use neighbors::Neighbors;
pub use search::{SearchError, SearchOutcome, SearchStats, Tracer};
pub use solutions::{Offer, Solutions};
pub use trace::TraceState;

use std::collections::VecDeque;

use circuit_core::Board;

use crate::neighbors::Neighbors;

/// Sentinel for "not reached yet" in the distance map.
const UNREACHABLE: u32 = u32::MAX;

/// Length of the shortest possible trace on `board`, or `None` if the
/// components cannot be connected.
///
/// Breadth-first search over open positions, seeded with the open
/// neighbours of the start component at distance 1. The first position
/// dequeued next to the end component gives the answer, so this counts
/// traced positions the same way [`TraceState::path_length`] does.
///
/// [`TraceState::path_length`]: crate::TraceState::path_length
pub fn shortest_distance(board: &Board) -> Option<usize> {
    let dims = board.dims();
    let end = board.end();
    let mut dist = vec![UNREACHABLE; dims.area()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut nb = Neighbors::new();

    for &p in nb.cardinal(board.start(), |p| board.is_open(p)) {
        let Some(i) = dims.index(p) else {
            continue;
        };
        dist[i] = 1;
        queue.push_back(i);
    }

    while let Some(ci) = queue.pop_front() {
        let cp = dims.pos(ci);
        let d = dist[ci];
        if cp.is_adjacent(end) {
            return Some(d as usize);
        }
        for &np in nb.cardinal(cp, |p| board.is_open(p)) {
            let Some(ni) = dims.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = d + 1;
            queue.push_back(ni);
        }
    }
    None
}

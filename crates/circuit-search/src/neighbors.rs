use circuit_core::Pos;

/// Reusable buffer for filtered neighbour queries.
///
/// Neighbours always come out in the order up, down, left, right, which
/// keeps seeding and expansion in the same fixed order.
pub struct Neighbors {
    buf: Vec<Pos>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbours of `p` for which `keep` returns
    /// `true`.
    pub fn cardinal(&mut self, p: Pos, keep: impl Fn(Pos) -> bool) -> &[Pos] {
        self.buf.clear();
        self.buf
            .extend(p.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_and_keeps_order() {
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Pos::new(0, 0), |p| p.row >= 0 && p.col >= 0);
        assert_eq!(got, &[Pos::new(1, 0), Pos::new(0, 1)]);
        let got = nb.cardinal(Pos::new(5, 5), |_| true);
        assert_eq!(got.len(), 4);
        assert_eq!(got[0], Pos::new(4, 5));
    }
}

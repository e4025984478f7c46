//! Plain-text output of solutions.

use std::io::{self, Write};

use circuit_search::TraceState;

/// Write every solution board, each followed by a blank line.
pub fn write_solutions<W: Write>(out: &mut W, solutions: &[TraceState]) -> io::Result<()> {
    for s in solutions {
        writeln!(out, "{}", s.board())?;
    }
    out.flush()
}

//! Command-line surface and the top-level run.

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use circuit_core::{Board, BoardError};
use circuit_search::{Discipline, SearchError, Tracer, shortest_distance};

use crate::{console, viewer};

#[derive(Debug, Parser)]
#[command(
    name = "tracer",
    about = "Find every shortest trace between components 1 and 2 on a circuit board",
    version
)]
pub struct Cli {
    /// Frontier storage: `stack` explores depth-first, `queue` breadth-first.
    #[arg(value_enum)]
    pub storage: Storage,

    /// Where to show the solutions.
    #[arg(value_enum)]
    pub output: Output,

    /// Board file: `ROWS COLS` on the first line, then one row of
    /// `O X 1 2` symbols per line.
    pub file: PathBuf,

    /// Log more (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Storage {
    #[value(alias = "s")]
    Stack,
    #[value(alias = "q")]
    Queue,
}

impl From<Storage> for Discipline {
    fn from(s: Storage) -> Self {
        match s {
            Storage::Stack => Discipline::Stack,
            Storage::Queue => Discipline::Queue,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// Print solved boards to standard output.
    #[value(alias = "c")]
    Console,
    /// Browse solved boards interactively in the terminal.
    #[value(alias = "g")]
    Gui,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Everything a run needs, resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub discipline: Discipline,
    pub output: Output,
    pub path: PathBuf,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            discipline: cli.storage.into(),
            output: cli.output,
            path: cli.file.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("search failed: {0}")]
    Search(#[from] SearchError),
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("viewer failed: {0}")]
    Viewer(Box<dyn std::error::Error>),
}

/// Load the board, search it, and present the solutions.
///
/// Console output goes to `out`; the viewer takes over the terminal.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<(), RunError> {
    let board = Board::load(&config.path)?;
    let outcome = Tracer::new(config.discipline).run(&board)?;

    let shortest = shortest_distance(&board);
    if outcome.best_len() != shortest {
        log::error!(
            "search found length {:?} but the shortest possible is {:?}",
            outcome.best_len(),
            shortest
        );
    }
    match outcome.best_len() {
        Some(len) => log::info!(
            "{}: {} shortest traces of length {len}",
            config.path.display(),
            outcome.solutions.len()
        ),
        None => log::warn!(
            "{}: no trace connects the start and end components",
            config.path.display()
        ),
    }

    match config.output {
        Output::Console => console::write_solutions(out, &outcome.solutions)?,
        Output::Gui => {
            let solved = outcome.solutions.iter().map(|s| s.board().clone()).collect();
            viewer::show(&board, solved).map_err(RunError::Viewer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuit_core::FormatErrorKind;

    fn board_file(text: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(text.as_bytes()).unwrap();
        f
    }

    fn console(path: PathBuf, discipline: Discipline) -> RunConfig {
        RunConfig {
            discipline,
            output: Output::Console,
            path,
        }
    }

    #[test]
    fn parses_three_positionals() {
        let cli = Cli::try_parse_from(["tracer", "stack", "console", "board.dat"]).unwrap();
        assert_eq!(cli.storage, Storage::Stack);
        assert_eq!(cli.output, Output::Console);
        assert_eq!(cli.file, PathBuf::from("board.dat"));
        assert_eq!(cli.log_filter(), "warn");

        let config = RunConfig::from(&cli);
        assert_eq!(config.discipline, Discipline::Stack);
    }

    #[test]
    fn accepts_short_aliases_and_verbosity() {
        let cli = Cli::try_parse_from(["tracer", "-vv", "q", "g", "b.dat"]).unwrap();
        assert_eq!(cli.storage, Storage::Queue);
        assert_eq!(cli.output, Output::Gui);
        assert_eq!(cli.log_filter(), "debug");
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["tracer", "stack", "console"]).is_err());
        assert!(Cli::try_parse_from(["tracer", "heap", "console", "b.dat"]).is_err());
        assert!(Cli::try_parse_from(["tracer", "stack", "web", "b.dat"]).is_err());
        assert!(Cli::try_parse_from(["tracer", "stack", "console", "b.dat", "x"]).is_err());
    }

    #[test]
    fn console_run_prints_solution() {
        let f = board_file("3 3\n1 O X\nX O X\nX O 2\n");
        let mut out = Vec::new();
        run(&console(f.path().to_path_buf(), Discipline::Stack), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 T X \nX T X \nX T 2 \n\n");
    }

    #[test]
    fn disconnected_board_prints_nothing() {
        let f = board_file("1 3\n1 X 2\n");
        let mut out = Vec::new();
        run(&console(f.path().to_path_buf(), Discipline::Queue), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn malformed_board_is_reported() {
        let f = board_file("2 2\n1 O\nO 2\nO O\n");
        let mut out = Vec::new();
        let err = run(&console(f.path().to_path_buf(), Discipline::Queue), &mut out).unwrap_err();
        let RunError::Board(BoardError::Format(fe)) = &err else {
            panic!("expected a format error, got {err:?}");
        };
        assert_eq!(
            fe.kind,
            FormatErrorKind::TooManyRows {
                row: 2,
                expected: 2
            }
        );
        assert!(out.is_empty());
    }
}
